//! Implementation of `stacknix generate`.

use std::path::Path;

use anyhow::Result;

use stacknix::ops::{generate, GenerateOptions};
use stacknix::plan;
use stacknix::render::{Indent, RenderContext, DEFAULT_GHC_VERSION};
use stacknix::util::{Config, CONFIG_FILE_NAME};

use crate::cli::GenerateArgs;

pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = Config::load_or_default(Path::new(CONFIG_FILE_NAME));

    let ghc_version = args
        .ghc_version
        .or(config.ghc_version)
        .unwrap_or_else(|| DEFAULT_GHC_VERSION.to_string());

    let mut context = RenderContext::new(ghc_version);
    context.enable_tests = args.enable_tests || config.enable_tests.unwrap_or(false);
    context.enable_benchmarks =
        args.enable_benchmarks || config.enable_benchmarks.unwrap_or(false);
    context.enable_docs = args.enable_haddock || config.enable_haddock.unwrap_or(false);
    context.locals = args.locals.into_iter().chain(config.locals).collect();

    if let Some(width) = args.indent.or(config.indent) {
        context.indent = Indent::new(width);
    }

    let results = plan::load_plan(&args.plan)?;
    tracing::debug!("loaded {} plan entries", results.len());

    generate(
        results,
        &context,
        &GenerateOptions {
            output: args.output,
        },
    )
}
