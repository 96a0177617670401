pub mod question_service;
