use crate::{
    cli::{
        args::{Cli, Commands, EntityArgs, PageArgs, SharedArgs},
        questions::{self, Answers, ScaffoldPlan},
    },
    constants::{ENTITY_TEMPLATE_DIR, ID_PLACEHOLDER, PAGE_TEMPLATE_DIR},
    error::Result,
    pipeline::{Pipeline, RunOptions},
    renderer::get_template_engine,
};
use std::path::PathBuf;

/// Dispatches the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Entity(args) => run_entity(args),
        Commands::Page(args) => run_page(args),
    }
}

fn run_entity(args: EntityArgs) -> Result<()> {
    let answers = Answers::from_positionals(args.shared.site.clone(), args.shared.id.clone())
        .with_javascript(args.javascript_enabled());
    let answers = questions::ask_entity(answers, args.shared.non_interactive)?;
    let plan = answers.resolve()?;
    scaffold(&args.shared, &plan, ENTITY_TEMPLATE_DIR)
}

fn run_page(args: PageArgs) -> Result<()> {
    let answers = Answers::from_positionals(args.shared.site.clone(), args.shared.id.clone());
    let answers = questions::ask_page(answers, args.shared.non_interactive)?;
    let plan = answers.resolve()?;
    scaffold(&args.shared, &plan, PAGE_TEMPLATE_DIR)
}

/// Builds the run options for one scaffold command and executes the pipeline.
fn scaffold(shared: &SharedArgs, plan: &ScaffoldPlan, template_dir: &str) -> Result<()> {
    let source_base = shared.templates.join(template_dir);
    let destination = resolve_destination(shared, plan)?;

    let mut options = RunOptions::new(source_base, destination.clone(), plan.context()?);
    // Braced group references keep ids that start with a digit out of the
    // group name.
    options.rename_patterns.push((
        format!("(.*){ID_PLACEHOLDER}(.*)"),
        format!("${{1}}{}${{2}}", plan.id),
    ));
    if plan.javascript == Some(false) {
        options.remove_patterns.push(r"(.*)\.js$".to_string());
    }
    options.overwrite = !shared.keep_existing;

    let engine = get_template_engine();
    let report = Pipeline::new(&engine, &options).run()?;

    println!(
        "Scaffolding complete: {} file(s) written to '{}'.",
        report.written.len(),
        destination.display()
    );
    Ok(())
}

fn resolve_destination(shared: &SharedArgs, plan: &ScaffoldPlan) -> Result<PathBuf> {
    match &shared.destination {
        Some(destination) => Ok(destination.clone()),
        None => Ok(std::env::current_dir()?.join(&plan.site).join(&plan.id)),
    }
}
