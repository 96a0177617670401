pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;

use std::sync::Arc;

use crate::config::Config;
use crate::database::repository::{ChoiceRepository, QuestionRepository};
use crate::services::question_service::QuestionService;
use crate::utils::time::Clock;

pub const DEFAULT_INDEX_PAGE_SIZE: usize = 5;
pub const DEFAULT_PUBLIC_RPS: u32 = 100;

#[derive(Clone)]
pub struct AppState {
    pub question_service: QuestionService,
    pub index_page_size: usize,
    pub public_rps: u32,
}

impl AppState {
    /// State over a single store that keeps both questions and choices.
    pub fn new<S>(store: Arc<S>, clock: Arc<dyn Clock>) -> Self
    where
        S: QuestionRepository + ChoiceRepository + 'static,
    {
        let questions: Arc<dyn QuestionRepository> = store.clone();
        let choices: Arc<dyn ChoiceRepository> = store;
        Self {
            question_service: QuestionService::new(questions, choices, clock),
            index_page_size: DEFAULT_INDEX_PAGE_SIZE,
            public_rps: DEFAULT_PUBLIC_RPS,
        }
    }

    pub fn with_config(mut self, config: &Config) -> Self {
        self.index_page_size = config.index_page_size;
        self.public_rps = config.public_rps;
        self
    }
}
