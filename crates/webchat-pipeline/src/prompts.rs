//! Prompt builders. Each prompt is a plain struct rendered by a pure function,
//! so every field the model needs is present by construction.

/// Condense a page into a short Markdown summary.
#[derive(Debug, Clone, Copy)]
pub struct SummaryPrompt<'a> {
    pub model: &'a str,
    pub content: &'a str,
}

impl SummaryPrompt<'_> {
    pub fn render(&self) -> String {
        format!(
            "You are {model}, an expert at summarization. Write a concise summary of the content below.\n\
             \n\
             Requirements:\n\
             1. Highlight 3-5 key points\n\
             2. Keep important technical details\n\
             3. Use Markdown formatting\n\
             4. Length: 150-200 words\n\
             \n\
             Content:\n\
             {content}\n\
             \n\
             Summary:",
            model = self.model,
            content = self.content,
        )
    }
}

/// Answer a question strictly from retrieved context.
#[derive(Debug, Clone, Copy)]
pub struct QaPrompt<'a> {
    pub model: &'a str,
    pub context: &'a str,
    pub question: &'a str,
}

impl QaPrompt<'_> {
    pub fn render(&self) -> String {
        format!(
            "You are {model}, an AI assistant. Answer strictly from the context.\n\
             \n\
             Context:\n\
             {context}\n\
             \n\
             Question:\n\
             {question}\n\
             \n\
             Requirements:\n\
             1. Answer precisely from the context\n\
             2. Format the answer in Markdown\n\
             3. If the answer is not in the context, say so\n\
             \n\
             Answer:",
            model = self.model,
            context = self.context,
            question = self.question,
        )
    }
}
