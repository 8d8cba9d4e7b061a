//! Pipelined processor for large forests.
//!
//! Parsing, growing and output run as concurrent stages connected by bounded
//! channels: the parser emits each root as soon as its subtree is complete,
//! the grower annotates roots as they arrive, and the sink streams results.
//! Bounded capacity applies backpressure, so a slow sink stalls the parser
//! instead of buffering the whole forest.
//!
//! Ordering across roots is preserved because every stage is a single thread
//! draining a FIFO channel. An error in any stage stops the pipeline: the
//! failing stage drops its receiver, upstream sends fail and producers stop;
//! send failures themselves are not errors. The most upstream real error is
//! returned. Output already written stays written.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::slice;
use std::sync::mpsc;
use std::thread::{self, ScopedJoinHandle};

use crate::config::Config;
use crate::errors::{TreeError, TreeResult};
use crate::grow::Grower;
use crate::mkdir::Mkdirer;
use crate::node::Tree;
use crate::parse::OutlineParser;
use crate::process::needs_growing;
use crate::spread::Spreader;

/// Per-stage queue bound; keeps at most this many whole roots in flight.
const STAGE_CAPACITY: usize = 64;

pub(crate) fn output<W: Write, R: BufRead + Send>(
    w: &mut W,
    reader: R,
    cfg: &Config,
) -> TreeResult<()> {
    let grower = Grower::new(cfg);
    run(reader, cfg, grower, |grown_rx| {
        let mut spreader = Spreader::new(cfg);
        for tree in grown_rx {
            spreader.spread(w, slice::from_ref(&tree))?;
        }
        spreader.finish(w)
    })
}

pub(crate) fn mkdir<R: BufRead + Send>(reader: R, base: &Path, cfg: &Config) -> TreeResult<()> {
    let mut grower = Grower::new(cfg);
    grower.enable_validation();
    run(reader, cfg, grower, |grown_rx| {
        if cfg.dry_run {
            let mut spreader = Spreader::new(cfg);
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            for tree in grown_rx {
                spreader.spread(&mut lock, slice::from_ref(&tree))?;
            }
            spreader.finish(&mut lock)
        } else {
            let mkdirer = Mkdirer::new(cfg);
            for tree in grown_rx {
                mkdirer.mkdir_in(base, slice::from_ref(&tree))?;
            }
            Ok(())
        }
    })
}

/// Programmatic entry: a single root still overlaps growing with output.
pub(crate) fn output_tree<W: Write>(w: &mut W, tree: &Tree, cfg: &Config) -> TreeResult<()> {
    let grower = Grower::new(cfg);
    run_tree(tree, grower, |grown_rx| {
        let mut spreader = Spreader::new(cfg);
        for tree in grown_rx {
            spreader.spread(w, slice::from_ref(&tree))?;
        }
        spreader.finish(w)
    })
}

pub(crate) fn mkdir_tree(tree: &Tree, base: &Path, cfg: &Config) -> TreeResult<()> {
    let mut grower = Grower::new(cfg);
    grower.enable_validation();
    run_tree(tree, grower, |grown_rx| {
        if cfg.dry_run {
            let mut spreader = Spreader::new(cfg);
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            for tree in grown_rx {
                spreader.spread(&mut lock, slice::from_ref(&tree))?;
            }
            spreader.finish(&mut lock)
        } else {
            let mkdirer = Mkdirer::new(cfg);
            for tree in grown_rx {
                mkdirer.mkdir_in(base, slice::from_ref(&tree))?;
            }
            Ok(())
        }
    })
}

/// Wires parse → grow → sink. The sink runs on the calling thread so it can
/// borrow the caller's writer.
fn run<R, F>(reader: R, cfg: &Config, grower: Grower, sink: F) -> TreeResult<()>
where
    R: BufRead + Send,
    F: FnOnce(mpsc::Receiver<Tree>) -> TreeResult<()>,
{
    let parser = OutlineParser::new(cfg.indent);
    let grow_needed = needs_growing(cfg) || grower.validates();

    let (parsed_tx, parsed_rx) = mpsc::sync_channel::<Tree>(STAGE_CAPACITY);
    let (grown_tx, grown_rx) = mpsc::sync_channel::<Tree>(STAGE_CAPACITY);

    thread::scope(|scope| {
        let parse_stage = scope.spawn(move || {
            // A closed channel means downstream stopped; not an error here.
            parser.parse_each(reader, |tree| parsed_tx.send(tree).is_ok())
        });
        let grow_stage = scope.spawn(move || -> TreeResult<()> {
            for mut tree in parsed_rx {
                if grow_needed {
                    grower.grow_tree(&mut tree)?;
                }
                if grown_tx.send(tree).is_err() {
                    break;
                }
            }
            Ok(())
        });

        let sink_result = sink(grown_rx);

        join_stage(parse_stage)
            .and(join_stage(grow_stage))
            .and(sink_result)
    })
}

/// Two-stage variant for a programmatic root: grow on a worker, sink on the
/// calling thread.
fn run_tree<F>(tree: &Tree, grower: Grower, sink: F) -> TreeResult<()>
where
    F: FnOnce(mpsc::Receiver<Tree>) -> TreeResult<()>,
{
    let (grown_tx, grown_rx) = mpsc::sync_channel::<Tree>(1);
    let mut owned = tree.clone();

    thread::scope(|scope| {
        let grow_stage = scope.spawn(move || -> TreeResult<()> {
            grower.grow_tree(&mut owned)?;
            let _ = grown_tx.send(owned);
            Ok(())
        });

        let sink_result = sink(grown_rx);
        join_stage(grow_stage).and(sink_result)
    })
}

fn join_stage(handle: ScopedJoinHandle<'_, TreeResult<()>>) -> TreeResult<()> {
    handle
        .join()
        .unwrap_or_else(|_| Err(TreeError::Pipeline("stage panicked".to_string())))
}
