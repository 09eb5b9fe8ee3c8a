// Dataset generation: samples seed words, drives the poem pipeline over every
// language × form × mood combination and appends JSONL training records.

pub mod builder;
pub mod sink;
pub mod vocabulary;
