//! Command-line walkthrough of the [`bound_terms`] API.
//!
//! The `demo` command builds scalar and sequence terms, compares and casts
//! them, moves values out, and unifies a partially bound pattern, printing
//! each step.  The `sizes` command reports the in-memory size of the main
//! types.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=trace` (or pass
//! `--verbose` to `demo`) to see the unification phases.

use bound_terms::{
    Atom, Binary, Float, Integer, List, Payload, Term, TermError, Tuple, list, tuple,
};
use clap::{Parser as ClapParser, Subcommand};
use std::mem;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs a scripted walkthrough of term construction, comparison and unification
    Demo {
        /// Log unification phases at trace level
        #[arg(short, long)]
        verbose: bool,
    },
    /// Prints sizes
    Sizes {},
}

fn main() -> Result<(), TermError> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Commands::Demo { verbose: true } = args.command {
        logger.filter_level(log::LevelFilter::Trace);
    }
    logger.init();

    match args.command {
        Commands::Demo { .. } => demo()?,
        Commands::Sizes {} => {
            println!("Size of Term: {}", mem::size_of::<Term>());
            println!("Size of Payload: {}", mem::size_of::<Payload>());
            println!("Size of Atom: {}", mem::size_of::<Atom>());
            println!("Size of Integer: {}", mem::size_of::<Integer>());
            println!("Size of Float: {}", mem::size_of::<Float>());
            println!("Size of Binary: {}", mem::size_of::<Binary>());
            println!("Size of Tuple: {}", mem::size_of::<Tuple>());
            println!("Size of List: {}", mem::size_of::<List>());
        }
    }

    Ok(())
}

fn demo() -> Result<(), TermError> {
    println!("scalar construction");
    let mut a1 = Atom::new("hello_world");
    println!("  a1 = {a1}, a1 == \"hello_world\": {}", a1.eq_literal("hello_world")?);

    println!("scalar move");
    let a2 = a1.take();
    println!("  a2 = {a2}, a1 bound: {}", a1.is_bound());
    match a1.equals(&a2) {
        Err(e) => println!("  a1 == a2: {e}"),
        Ok(eq) => println!("  a1 == a2: {eq}"),
    }

    println!("scalar ordering");
    let f1 = Float::new(5.3);
    println!("  {f1} < 5.4: {}, {f1} >= 5.2: {}", f1.lt(&5.4)?, f1.ge(&5.2)?);

    println!("generic term rebinding");
    let mut t = Term::from(Atom::new("ggg"));
    println!("  t = {t}");
    t.assign(Float::new(3.5));
    println!("  t = {t}, t == 'ggg': {}", t.eq_value(&Atom::new("ggg"))?);
    t.assign(Integer::new(11));
    println!("  t = {t}, t == 3.5: {}", t.eq_value(&Float::new(3.5))?);

    println!("tuples and lists");
    let tup = Term::from(tuple![Atom::new("hello"), Binary::new(&b"world"[..])]);
    let lst = Term::from(list![Atom::new("hello"), Binary::new(&b"world"[..])]);
    println!("  {tup} == {lst}: {}", tup.equals(&lst)?);
    println!("  size of {tup}: {}", tup.cast::<Tuple>()?.size()?);
    if let Err(e) = tup.cast::<List>() {
        println!("  cast {tup} to list: {e}");
    }

    println!("unification");
    let value = Term::from(tuple![
        Atom::new("hello"),
        tuple![Atom::new("hello"), Binary::new(&b"world"[..])]
    ]);
    let mut pattern = Term::from(tuple![
        Atom::new("hello"),
        tuple![Atom::new("hello"), Binary::unbound()]
    ]);
    println!("  {pattern} = {value}");
    let matched = pattern.unify(&value)?;
    println!("  matched: {matched}, pattern now {pattern}");

    let mut rejected = Term::from(tuple![Atom::new("bye"), Tuple::unbound()]);
    let matched = rejected.unify(&value)?;
    println!("  {rejected} = {value}: {matched}");

    Ok(())
}
