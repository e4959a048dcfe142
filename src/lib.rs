#![recursion_limit = "1024"]

extern crate chrono;
extern crate clap;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate uuid;

pub mod errors {
    error_chain!{}
}

pub mod anagram;
pub mod combiner;
pub mod emitter;
pub mod intermediate;
pub mod io;
pub mod mapper;
pub mod partition;
pub mod pipeline;
pub mod reducer;
pub mod registry;
pub mod runner;
pub mod serialise;

pub use anagram::{AlphabetPartitioner, AnagramCombiner, AnagramMapper, AnagramReducer,
                  RenderOptions};
pub use combiner::{Combine, NullCombiner};
pub use emitter::{EmitFinal, EmitIntermediate, FinalVecEmitter, IntermediateVecEmitter};
pub use errors::*;
pub use intermediate::IntermediateInputKV;
pub use io::{read_intermediate_input, read_map_input, write_combine_output, write_map_output,
             write_reduce_output};
pub use mapper::{Map, MapInputKV};
pub use partition::{HashPartitioner, Partition, PartitionInputKV};
pub use pipeline::run_local;
pub use reducer::Reduce;
pub use registry::{UserImplRegistry, UserImplRegistryBuilder};
pub use runner::{parse_command_line, run};

const VERSION: Option<&'static str> = option_env!("CARGO_PKG_VERSION");
