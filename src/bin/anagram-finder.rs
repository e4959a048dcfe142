extern crate anagram_finder;
extern crate env_logger;
#[macro_use]
extern crate error_chain;

use anagram_finder::*;

const MAP_OUTPUT_PARTITIONS: u64 = 15;

fn run() -> Result<()> {
    env_logger::init().chain_err(
        || "Failed to initialise logging.",
    )?;

    let mapper = AnagramMapper;
    let reducer = AnagramReducer::new(RenderOptions::default());
    let combiner = AnagramCombiner;
    let partitioner = AlphabetPartitioner::new(MAP_OUTPUT_PARTITIONS);

    let matches = anagram_finder::parse_command_line();

    let registry = UserImplRegistryBuilder::new()
        .mapper(&mapper)
        .reducer(&reducer)
        .partitioner(&partitioner)
        .combiner(&combiner)
        .build()
        .chain_err(|| "Error building UserImplRegistry.")?;

    anagram_finder::run(&matches, &registry)
}

// Macro to generate a quick error_chain main function.
// https://github.com/rust-lang-nursery/error-chain/blob/master/examples/quickstart.rs
quick_main!(run);
