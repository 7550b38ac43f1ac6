// Document verification pipeline over OCR text
// OCR itself is an external collaborator; this driver consumes its output.

use clap::Parser;
use pramaan::models::VerificationReport;
use pramaan::utils::VerifyError;
use pramaan::DocumentVerifier;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pramaan",
    about = "Verify OCR-extracted government ID text and grade its integrity"
)]
struct Args {
    /// Text file with the OCR output for one page; stdin when omitted
    input: Option<PathBuf>,

    /// OCR confidence reported by the engine, 0-100
    #[arg(long, default_value_t = 75.0)]
    confidence: f64,

    /// Emit the report as JSON instead of the human-readable form
    #[arg(long)]
    json: bool,
}

// Function to print a detailed verification report
fn print_detailed_report(report: &VerificationReport) {
    println!("\n===============================================");
    println!("      DOCUMENT VERIFICATION DETAILED REPORT");
    println!("===============================================\n");

    println!("DOCUMENT INFORMATION:");
    println!("  File Name: {}", report.file_name);
    println!("  Document Type: {}", report.document_type);
    println!("  Document Category: {}", report.document_category);
    println!("  Template Match Score: {}", report.template_match_score);
    println!("  Aadhaar Detected: {}", report.aadhaar_detected);
    println!("  Aadhaar Number: {:?}", report.aadhaar_number);
    println!("  PAN Detected: {}", report.pan_detected);
    println!("  PAN Number: {:?}", report.pan_number);

    println!("\nEXTRACTED FIELDS:");
    for (name, value) in &report.extracted_fields {
        println!("  {}: {}", name, value.as_deref().unwrap_or("(not found)"));
    }

    println!("\nFIELD VALIDATION:");
    for (name, check) in &report.field_validation {
        println!(
            "  {}: {} ({})",
            name,
            if check.valid { "PASSED" } else { "FAILED" },
            check.reason
        );
    }

    if !report.suspicious_fields.is_empty() {
        println!("\nSUSPICIOUS FIELDS:");
        for entry in &report.suspicious_fields {
            println!("  - {}", entry);
        }
    }

    println!("\nCONFIDENCE:");
    println!("  OCR Confidence: {}", report.ocr_confidence);
    println!("  Field Confidence: {}", report.field_confidence);
    println!(
        "  Verification Confidence: {}",
        report.verification_confidence
    );
    println!("\nOverall Integrity: {}", report.overall_integrity);
}

fn run(args: Args) -> Result<(), VerifyError> {
    if !(0.0..=100.0).contains(&args.confidence) {
        return Err(VerifyError::InvalidInput(format!(
            "confidence must be within 0-100, got {}",
            args.confidence
        )));
    }

    let (file_name, text) = match &args.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            (name, text)
        }
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            ("<stdin>".to_string(), text)
        }
    };

    let verifier = DocumentVerifier::new();
    let report = verifier.verify(&file_name, &text, args.confidence);

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| VerifyError::InvalidInput(e.to_string()))?;
        println!("{}", json);
    } else {
        print_detailed_report(&report);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error verifying document: {}", err);
        std::process::exit(1);
    }
}
