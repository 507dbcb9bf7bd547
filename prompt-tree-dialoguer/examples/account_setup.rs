//! Every widget the backend supports, with a plain theme.
//!
//! Run with: cargo run -p prompt-tree-dialoguer --example account_setup

use example_trees::{ACCOUNT_EPILOGUE, ACCOUNT_PRELUDE, account_setup};
use prompt_tree::{SurveyError, SurveyTree};
use prompt_tree_dialoguer::DialoguerBackend;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let tree = SurveyTree::new(account_setup())
        .with_prelude(ACCOUNT_PRELUDE)
        .with_epilogue(ACCOUNT_EPILOGUE);

    match tree.run(&DialoguerBackend::plain()) {
        Ok(answers) => println!("{answers:#?}"),
        Err(SurveyError::Cancelled) => println!("Cancelled, nothing was saved."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
