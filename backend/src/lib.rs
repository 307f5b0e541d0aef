pub mod char_class;
pub mod normalize;
pub mod segmenter;
pub mod syllable_index;
pub mod logger;
