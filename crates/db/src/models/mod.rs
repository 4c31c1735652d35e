pub mod webtoon;
