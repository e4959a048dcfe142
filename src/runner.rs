use std::io::{stdin, stdout};

use chrono::prelude::*;
use clap::{App, ArgMatches, SubCommand};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use combiner::Combine;
use emitter::IntermediateVecEmitter;
use errors::*;
use io::*;
use mapper::Map;
use partition::{Partition, PartitionInputKV};
use reducer::Reduce;
use registry::UserImplRegistry;
use serialise::{CombineOutputObject, CombineOutputObjectEmitter, FinalOutputObject,
                FinalOutputObjectEmitter, IntermediateOutputObject, IntermediateOutputPair};
use super::VERSION;

/// `parse_command_line` uses `clap` to parse the command-line arguments passed to the payload.
///
/// The output of this function is required by the `run` function, to decide what subcommand to
/// run.
pub fn parse_command_line<'a>() -> ArgMatches<'a> {
    let current_time = Utc::now();
    let id = Uuid::new_v4();
    let payload_name = format!("{}_{}", current_time.format("%+"), id);
    let app = App::new(payload_name)
        .version(VERSION.unwrap_or("unknown"))
        .subcommand(SubCommand::with_name("map"))
        .subcommand(SubCommand::with_name("combine"))
        .subcommand(SubCommand::with_name("reduce"))
        .subcommand(SubCommand::with_name("has-combine"))
        .subcommand(SubCommand::with_name("sanity-check"));
    app.get_matches()
}

/// `run` begins the primary operations of the payload, and delegates to sub-functions.
///
/// # Arguments
///
/// `matches` - The output of the `parse_command_line` function.
/// `registry` - The output of the `UserImplRegistryBuilder::build` function.
pub fn run<M, R, P, C>(matches: &ArgMatches, registry: &UserImplRegistry<M, R, P, C>) -> Result<()>
where
    M: Map,
    R: Reduce<Value = M::Value>,
    P: Partition<M::Key, M::Value>,
    C: Combine<M::Value>,
    M::Value: Default + DeserializeOwned,
{
    match matches.subcommand_name() {
        Some("map") => Ok(run_map(registry.mapper, registry.partitioner)?),
        Some("combine") => Ok(run_combine(registry.combiner)?),
        Some("reduce") => Ok(run_reduce(registry.reducer)?),
        Some("has-combine") => {
            run_has_combine(registry.combiner.is_some());
            Ok(())
        }
        Some("sanity-check") => {
            run_sanity_check();
            Ok(())
        }
        None => {
            eprintln!("{}", matches.usage());
            Ok(())
        }
        // This won't ever be reached, due to clap checking invalid commands before this.
        _ => Ok(()),
    }
}

fn run_map<M, P>(mapper: &M, partitioner: &P) -> Result<()>
where
    M: Map,
    P: Partition<M::Key, M::Value>,
{
    let mut source = stdin();
    let mut sink = stdout();
    let input_kv = read_map_input(&mut source).chain_err(
        || "Error getting input to map.",
    )?;

    let mut pairs: Vec<(M::Key, M::Value)> = Vec::new();

    mapper
        .map(input_kv, IntermediateVecEmitter::new(&mut pairs))
        .chain_err(|| "Error running map operation.")?;

    let mut output_object = IntermediateOutputObject::<M::Key, M::Value>::default();

    for (key, value) in pairs {
        let partition = partitioner
            .partition(PartitionInputKV::new(&key, &value))
            .chain_err(|| "Error partitioning map output.")?;
        output_object
            .partitions
            .entry(partition)
            .or_insert_with(Vec::new)
            .push(IntermediateOutputPair { key, value });
    }

    write_map_output(&mut sink, &output_object).chain_err(
        || "Error writing map output to stdout.",
    )?;
    Ok(())
}

fn run_combine<C, V>(combiner: Option<&C>) -> Result<()>
where
    C: Combine<V>,
    V: Default + Serialize + DeserializeOwned,
{
    let combiner = combiner.chain_err(
        || "No combine implementation registered for this payload.",
    )?;
    let mut source = stdin();
    let mut sink = stdout();
    let input_kv = read_intermediate_input(&mut source).chain_err(
        || "Error getting input to combine.",
    )?;
    let mut output_object = CombineOutputObject::<String, V>::default();

    combiner
        .combine(input_kv, CombineOutputObjectEmitter::new(&mut output_object))
        .chain_err(|| "Error running combine operation.")?;

    write_combine_output(&mut sink, &output_object).chain_err(
        || "Error writing combine output to stdout.",
    )?;
    Ok(())
}

fn run_reduce<R: Reduce>(reducer: &R) -> Result<()> {
    let mut source = stdin();
    let mut sink = stdout();
    let input_kv = read_intermediate_input(&mut source).chain_err(
        || "Error getting input to reduce.",
    )?;
    let mut output_object = FinalOutputObject::<R::Value>::default();

    reducer
        .reduce(input_kv, FinalOutputObjectEmitter::new(&mut output_object))
        .chain_err(|| "Error running reduce operation.")?;

    write_reduce_output(&mut sink, &output_object).chain_err(
        || "Error writing reduce output to stdout.",
    )?;
    Ok(())
}

// The worker probes payload binaries with this subcommand before scheduling combine tasks.
fn run_has_combine(has_combine: bool) {
    if has_combine {
        println!("yes");
    } else {
        println!("no");
    }
}

fn run_sanity_check() {
    println!("sanity located");
}
