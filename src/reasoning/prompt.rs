/// Builds the fixed instructional prompt with the document text embedded
/// verbatim. The rating instruction is load-bearing: the reliability signal
/// is later extracted from the prose response.
pub(crate) fn build_critique_prompt(document_text: &str) -> String {
    format!(
        "Analyze the following sustainability report and detect any inconsistencies, \
         vague claims, or greenwashing attempts.\n\
         Highlight misleading statements and provide an overall reliability rating (0-100).\n\
         \n\
         Sustainability Report:\n\
         {document_text}\n\
         \n\
         Response:"
    )
}
