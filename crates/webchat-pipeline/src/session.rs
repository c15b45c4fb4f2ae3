use crate::chat::ChatBot;
use crate::error::SessionError;
use crate::history::{ChatHistory, TranscriptWriter};
use crate::ingest::EmbeddingIngestor;
use crate::summarize::WebSummarizer;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tracing::{info, warn};
use webchat_config::{ChatConfig, Config};
use webchat_core::llm::LlmClient;
use webchat_core::traits::Embedder;
use webchat_core::{Answer, ChatTurn, RawDocument};

/// Everything derived from the current document, sequenced for one user.
///
/// `start` replaces the document and discards the previous index, summary
/// and history. Questions can only be asked once `ingest` has built an index.
pub struct Session {
    embedder: Arc<dyn Embedder>,
    llm: Arc<dyn LlmClient>,
    ingestor: EmbeddingIngestor,
    summarizer: WebSummarizer,
    chat_config: ChatConfig,
    transcript: TranscriptWriter,
    document: Option<RawDocument>,
    bot: Option<ChatBot>,
    chunk_count: usize,
    summary: Option<String>,
    history: Mutex<ChatHistory>,
}

impl Session {
    pub fn new(
        config: &Config,
        embedder: Arc<dyn Embedder>,
        llm: Arc<dyn LlmClient>,
    ) -> Result<Self, SessionError> {
        let ingestor = EmbeddingIngestor::new(&config.chunking, embedder.clone())?;
        let summarizer = WebSummarizer::new(llm.clone(), config.summary.clone());
        Ok(Self {
            embedder,
            llm,
            ingestor,
            summarizer,
            chat_config: config.chat.clone(),
            transcript: TranscriptWriter::new(config.core.transcript_path.clone()),
            document: None,
            bot: None,
            chunk_count: 0,
            summary: None,
            history: Mutex::new(ChatHistory::default()),
        })
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// Make `document` current, dropping everything derived from the previous one.
    pub fn start(&mut self, document: RawDocument) {
        info!(source = document.source(), "starting session on new document");
        self.bot = None;
        self.chunk_count = 0;
        self.summary = None;
        self.lock_history().clear();
        self.document = Some(document);
    }

    pub fn document(&self) -> Option<&RawDocument> {
        self.document.as_ref()
    }

    pub fn has_index(&self) -> bool {
        self.bot.is_some()
    }

    /// Number of chunks in the current index, zero before `ingest`.
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Build the vector index for the current document.
    pub fn ingest(&mut self) -> Result<usize, SessionError> {
        let document = self.document.as_ref().ok_or(SessionError::NoDocument)?;
        let index = Arc::new(self.ingestor.create_embeddings(document)?);
        self.chunk_count = index.len();
        self.bot = Some(ChatBot::new(
            index,
            self.embedder.clone(),
            self.llm.clone(),
            self.chat_config.clone(),
        ));
        Ok(self.chunk_count)
    }

    /// Regenerate the summary of the current document.
    pub fn summarize(&mut self) -> Result<&str, SessionError> {
        let document = self.document.as_ref().ok_or(SessionError::NoDocument)?;
        let summary = self.summarizer.summarize(document.text())?;
        Ok(self.summary.insert(summary).as_str())
    }

    /// Answer `question`, record the turn and rewrite the transcript.
    ///
    /// Retrieval and generation failures still produce a turn carrying the
    /// diagnostic text. If the transcript cannot be written the turn stays in
    /// the history and is returned inside [`SessionError::Persist`].
    pub fn ask(&self, question: &str) -> Result<ChatTurn, SessionError> {
        if self.document.is_none() {
            return Err(SessionError::NoDocument);
        }
        let bot = self.bot.as_ref().ok_or(SessionError::NoIndex)?;

        let started = Instant::now();
        let answer = bot.answer(question).unwrap_or_else(|failure| {
            warn!(kind = %failure.kind, model = %failure.model, "{}", failure.message);
            Answer::from(failure)
        });
        let turn = ChatTurn::new(question, answer, started.elapsed());

        let mut history = self.lock_history();
        history.push(turn.clone());
        if let Err(source) = self.transcript.write(&history) {
            return Err(SessionError::Persist {
                path: self.transcript.path().to_path_buf(),
                source,
                turn: Box::new(turn),
            });
        }
        Ok(turn)
    }

    pub fn history(&self) -> Vec<ChatTurn> {
        self.lock_history().turns().to_vec()
    }

    fn lock_history(&self) -> MutexGuard<'_, ChatHistory> {
        // a panic while holding the lock leaves the history itself consistent
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
