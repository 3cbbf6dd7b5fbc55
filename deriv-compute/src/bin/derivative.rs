use ariadne::Source;
use deriv_compute::{differentiate, primitive::complex};
use deriv_error::Error;

fn report(err: Error, source: &str) {
    err.build_report("input")
        .eprint(("input", Source::from(source)))
        .unwrap();
}

fn main() {
    let source = std::env::args().nth(1).unwrap_or_else(|| "x^4 + 3*x^2".to_string());

    let derivs = match differentiate(&source) {
        Ok(derivs) => derivs,
        Err(err) => return report(err, &source),
    };

    println!("f(x)   = {}", derivs.original);
    println!("f'(x)  = {}", derivs.first);
    println!("f''(x) = {}", derivs.second);

    match derivs.eval_first(complex(2)) {
        Ok(value) => println!("f'(2)  = {}", value),
        Err(err) => report(err, &source),
    }
}
