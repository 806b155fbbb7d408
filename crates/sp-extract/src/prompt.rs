//! Instruction sent to the extraction service.

/// Build the extraction instruction around the raw clipboard text.
///
/// The text is embedded verbatim.
#[must_use]
pub fn build_prompt(text: &str) -> String {
    format!(
        "Given the following unstructured text:\n\
         \n\
         \"\"\"\n\
         {text}\n\
         \"\"\"\n\
         \n\
         Extract the fields as a JSON object. If you do not have enough information to \
         fill out part of the object, leave that field out.\n\
         \n\
         Only output a valid JSON object. Do not include explanation or comments.\n"
    )
}
