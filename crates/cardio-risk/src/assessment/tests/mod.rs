mod common;
mod pipeline;
mod report;
mod validation;
