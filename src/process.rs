//! Tree processors: sequential and pipelined execution of one conversion.
//!
//! Both variants implement the same parse → grow → spread/mkdir capability;
//! call sites pick one at construction time from [`Config::massive`] and do
//! not vary otherwise.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::config::{Config, Encode};
use crate::errors::TreeResult;
use crate::grow::Grower;
use crate::mkdir::Mkdirer;
use crate::node::Tree;
use crate::parse::OutlineParser;
use crate::pipeline;
use crate::spread::Spreader;

pub(crate) enum Processor {
    Simple,
    Pipeline,
}

impl Processor {
    pub fn from_config(cfg: &Config) -> Self {
        if cfg.massive {
            Processor::Pipeline
        } else {
            Processor::Simple
        }
    }

    pub fn output<W: Write, R: BufRead + Send>(
        &self,
        w: &mut W,
        reader: R,
        cfg: &Config,
    ) -> TreeResult<()> {
        match self {
            Processor::Simple => output(w, reader, cfg),
            Processor::Pipeline => pipeline::output(w, reader, cfg),
        }
    }

    pub fn output_tree<W: Write>(&self, w: &mut W, tree: &Tree, cfg: &Config) -> TreeResult<()> {
        match self {
            Processor::Simple => output_tree(w, tree, cfg),
            Processor::Pipeline => pipeline::output_tree(w, tree, cfg),
        }
    }

    pub fn mkdir<R: BufRead + Send>(&self, reader: R, base: &Path, cfg: &Config) -> TreeResult<()> {
        match self {
            Processor::Simple => mkdir(reader, base, cfg),
            Processor::Pipeline => pipeline::mkdir(reader, base, cfg),
        }
    }

    pub fn mkdir_tree(&self, tree: &Tree, base: &Path, cfg: &Config) -> TreeResult<()> {
        match self {
            Processor::Simple => mkdir_tree(tree, base, cfg),
            Processor::Pipeline => pipeline::mkdir_tree(tree, base, cfg),
        }
    }
}

/// Branch prefixes only matter for the diagram sinks; the structured encoders
/// never consult them.
pub(crate) fn needs_growing(cfg: &Config) -> bool {
    cfg.dry_run || matches!(cfg.encode, Encode::Text)
}

fn output<W: Write, R: BufRead + Send>(w: &mut W, reader: R, cfg: &Config) -> TreeResult<()> {
    let mut forest = OutlineParser::new(cfg.indent).parse(reader)?;
    if needs_growing(cfg) {
        Grower::new(cfg).grow(&mut forest)?;
    }
    let mut spreader = Spreader::new(cfg);
    spreader.spread(w, &forest)?;
    spreader.finish(w)
}

fn output_tree<W: Write>(w: &mut W, tree: &Tree, cfg: &Config) -> TreeResult<()> {
    let mut forest = vec![tree.clone()];
    if needs_growing(cfg) {
        Grower::new(cfg).grow(&mut forest)?;
    }
    let mut spreader = Spreader::new(cfg);
    spreader.spread(w, &forest)?;
    spreader.finish(w)
}

fn mkdir<R: BufRead + Send>(reader: R, base: &Path, cfg: &Config) -> TreeResult<()> {
    let forest = OutlineParser::new(cfg.indent).parse(reader)?;
    mkdir_forest(forest, base, cfg)
}

fn mkdir_tree(tree: &Tree, base: &Path, cfg: &Config) -> TreeResult<()> {
    mkdir_forest(vec![tree.clone()], base, cfg)
}

fn mkdir_forest(mut forest: Vec<Tree>, base: &Path, cfg: &Config) -> TreeResult<()> {
    let mut grower = Grower::new(cfg);
    grower.enable_validation();
    grower.grow(&mut forest)?;

    if cfg.dry_run {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        let mut spreader = Spreader::new(cfg);
        spreader.spread(&mut lock, &forest)?;
        return spreader.finish(&mut lock);
    }
    Mkdirer::new(cfg).mkdir_in(base, &forest)
}
