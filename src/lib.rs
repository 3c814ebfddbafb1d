pub mod app;
pub mod config;
pub mod data;
pub mod model;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use config::QuizConfig;
pub use model::{OptionStatus, QuestionRecord, QuestionSet};
pub use session::{QuizSession, SessionState};
