pub mod auth;
pub mod webtoon;
