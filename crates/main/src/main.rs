use std::error::Error;

use bonus_pdf::documents::DEFAULT_OUTPUT_DIR;
use bonus_pdf::{generate_all, BrandTheme};

/// Writes the three bonus PDFs into `public/downloads`.
///
/// Takes no arguments. Set `RUST_LOG=debug` to follow layout decisions.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Criando PDFs de bônus...");
    let theme = BrandTheme::tribebuild();
    let results = generate_all(DEFAULT_OUTPUT_DIR, &theme);

    let mut failed = 0;
    for generated in &results {
        match &generated.result {
            Ok(_) => println!("✅ {} criado!", generated.document.file_name()),
            Err(err) => {
                failed += 1;
                eprintln!("Error: {} ({})", err, generated.path.display());
                print_error_sources(err);
            }
        }
    }

    if failed > 0 {
        eprintln!("{failed} de {} PDFs falharam.", results.len());
        std::process::exit(1);
    }
    println!("\n✅ Todos os {} PDFs criados com sucesso!", results.len());
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
