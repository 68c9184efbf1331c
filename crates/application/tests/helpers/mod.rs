mod mock_readers;

pub use mock_readers::*;
