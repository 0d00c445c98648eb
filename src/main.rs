use std::env;
use std::fs;

use log::{debug, error, info};

use huffman_bitstring::code_table::{build_code_table, sorted_entries, weighted_length};
use huffman_bitstring::{count_frequencies, entropy_from_freq, try_decode, try_encode};

struct Options {
    text: String,
    source: String,
    show_table: bool,
    quiet: bool,
}

fn print_usage(program: &str) {
    error!("Usage: {} [--file <path>] [--table] [--quiet] [TEXT...]", program);
    eprintln!("  📂 --file <path>: read the text to encode from a UTF-8 file.");
    eprintln!("  📋 --table:       print the code table.");
    eprintln!("  🤫 --quiet:       print only the encoded bit-string.");
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut words: Vec<&str> = Vec::new();
    let mut file: Option<&str> = None;
    let mut show_table = false;
    let mut quiet = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--file" => match iter.next() {
                Some(path) => file = Some(path.as_str()),
                None => return Err("--file needs a path".to_string()),
            },
            "--table" => show_table = true,
            "--quiet" => quiet = true,
            word => words.push(word),
        }
    }

    let (text, source) = match file {
        Some(path) => {
            if !words.is_empty() {
                return Err("give either --file or TEXT, not both".to_string());
            }
            info!("Reading input file: {}", path);
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read input file {}: {}", path, e))?;
            (text, path.to_string())
        }
        None => (words.join(" "), "command line".to_string()),
    };

    if text.is_empty() {
        return Err("no text to encode".to_string());
    }

    Ok(Options {
        text,
        source,
        show_table,
        quiet,
    })
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("huffman", |s| s.as_str());

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };

    let (tree, bits) = match try_encode(&options.text) {
        Ok(res) => res,
        Err(e) => {
            error!("Encoding failed: {}", e);
            std::process::exit(1);
        }
    };

    let decoded = match try_decode(&tree, &bits) {
        Ok(text) => text,
        Err(e) => {
            error!("Decoding failed: {}", e);
            std::process::exit(1);
        }
    };
    if decoded != options.text {
        error!("CRITICAL: decoded text does not match the input!");
        std::process::exit(1);
    }
    debug!("Round trip verified.");

    if options.quiet {
        println!("{}", bits);
        return;
    }

    let table = build_code_table(Some(&tree));
    if options.show_table {
        println!("Huffman Codes:");
        for (symbol, code) in sorted_entries(&table) {
            println!("{:?} => {}", symbol, code);
        }
        println!();
    }

    let freq = count_frequencies(options.text.chars());
    let symbols = tree.weight();
    let entropy = entropy_from_freq(&freq);
    let average = weighted_length(&table, &freq) as f64 / symbols as f64;
    let ratio = 100.0 * (1.0 - bits.len() as f64 / (symbols as f64 * 8.0));

    println!("{}", bits);
    println!(
        "\r\n✅ Encoding and decoding successful.\n\
         📂  Input:       {} ({} symbols, {} distinct)\n\
         💾  Encoded:     {} bits (tree depth {})\n\
         ℹ️  Entropy:     {:.4} bits/symbol\n\
         📏  Average:     {:.4} bits/symbol\n\
         🗜️  Ratio:       {:.4}% (against 8 bits/symbol)",
        options.source,
        symbols,
        tree.symbol_count(),
        bits.len(),
        tree.depth(),
        entropy,
        average,
        ratio
    );
}
