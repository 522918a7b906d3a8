//! Morphological segmentation and reconstruction for Indonesian words.
//!
//! ```
//! use indoseg_lib::Engine;
//!
//! let engine = Engine::new();
//! assert_eq!(engine.segment("keberhasilan"), "ke~ber~hasil~an");
//! assert_eq!(engine.reconstruct("meN~pukul"), "memukul");
//! ```

pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod morphology;
pub mod normalize;
pub mod output;
pub mod reconstruct;
pub mod reduplication;
pub mod rules;
pub mod selection;
pub mod stemmer;
pub mod types;

pub use config::Config;
pub use dictionary::Dictionary;
pub use engine::{Engine, EngineBuilder};
pub use error::{Result, SegmenterError};
pub use normalize::normalize;
pub use rules::RuleStore;
pub use stemmer::{DictionaryStemmer, Stemmer};
pub use types::{Analysis, Morphemes, Reconstruction, RedupMarker, Segmentation, Strategy};
