use std::{fs, io::Read};

use calx::{
    ast::ExprKind,
    interpreter::{
        evaluator::evaluate,
        parser::parse,
        printer::{render_infix, render_rpn, render_sexpr},
    },
};
use clap::Parser;

/// calx is a command-line calculator for infix arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treats the input as a file path instead of an expression ('-' reads
    /// standard input).
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed expression in fully parenthesized infix form.
    #[arg(long)]
    print_infix: bool,

    /// Prints the parsed expression as an s-expression.
    #[arg(long)]
    print_s: bool,

    /// Prints the parsed expression in reverse Polish notation.
    #[arg(long)]
    print_rpn: bool,

    /// The expression to evaluate. Multiple arguments are joined with
    /// spaces, so quoting the whole expression is optional.
    #[arg(required = true)]
    contents: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        read_source(&args.contents)
    } else {
        args.contents.join(" ")
    };

    let expr = parse(&source);
    if let ExprKind::Error(error) = &expr.kind {
        eprintln!("{error}");
        std::process::exit(1);
    }

    if args.print_infix {
        println!("Interpretation (Infix): {}", render_infix(&expr));
    }
    if args.print_s {
        println!("Interpretation (S-expression): {}", render_sexpr(&expr));
    }
    if args.print_rpn {
        println!("Interpretation (RPN): {}", render_rpn(&expr));
    }

    if matches!(expr.kind, ExprKind::Unit) {
        println!("()");
    } else {
        println!("{}", evaluate(&expr));
    }
}

/// Reads the expression text named by the file arguments.
fn read_source(contents: &[String]) -> String {
    let [path] = contents else {
        eprintln!("Expected exactly one file path with --file.");
        std::process::exit(1);
    };

    if path == "-" {
        let mut source = String::new();
        if std::io::stdin().read_to_string(&mut source).is_err() {
            eprintln!("Failed to read an expression from standard input.");
            std::process::exit(1);
        }
        source
    } else {
        fs::read_to_string(path).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    }
}
