mod webtoon_repo;

pub use webtoon_repo::WebtoonRepo;
