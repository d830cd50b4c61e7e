mod response_merger;


pub use response_merger::ResponseMerger;
