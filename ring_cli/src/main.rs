//! # Kilnring CLI Application
//!
//! Interactive front end for the wedge-brick ring calculator. Prompts for
//! each ring parameter with a sensible default, runs the calculation, prints
//! the text report, writes both diagrams as SVG files into the working
//! directory, and finishes with the result as JSON.
//!
//! Invalid geometry is a user-input problem: the process reports the
//! structured error without a stack trace and exits non-zero.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use ring_core::calculations::ring::{calculate, FacePolicy, RingSpec};
use ring_core::report::text_report;
use ring_diagrams::{cut_template, ring_layout};

const RING_LAYOUT_FILE: &str = "ring_layout.svg";
const CUT_TEMPLATE_FILE: &str = "cut_template.svg";

/// Read one trimmed line; `None` means stdin is closed or unreadable.
fn read_line() -> Option<String> {
    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    loop {
        print!("{prompt} [{default}]: ");
        if io::stdout().flush().is_err() {
            return default;
        }
        match read_line().as_deref() {
            None | Some("") => return default,
            Some(entry) => match entry.parse() {
                Ok(value) => return value,
                Err(_) => println!("  '{entry}' is not a number, try again"),
            },
        }
    }
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    loop {
        print!("{prompt} [{default}]: ");
        if io::stdout().flush().is_err() {
            return default;
        }
        match read_line().as_deref() {
            None | Some("") => return default,
            Some(entry) => match entry.parse() {
                Ok(value) => return value,
                Err(_) => println!("  '{entry}' is not a whole number, try again"),
            },
        }
    }
}

fn prompt_yes_no(prompt: &str, default: bool) -> bool {
    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        print!("{prompt} [{hint}]: ");
        if io::stdout().flush().is_err() {
            return default;
        }
        match read_line().as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("") => return default,
            Some("y") | Some("yes") => return true,
            Some("n") | Some("no") => return false,
            Some(entry) => println!("  '{entry}' is not y or n, try again"),
        }
    }
}

fn main() -> ExitCode {
    println!("Kilnring - Wedge Brick Ring Calculator");
    println!("======================================");
    println!();
    println!("Press Enter to accept the [default] for any prompt.");
    println!();

    let brick_count = prompt_u32("Bricks per ring (N)", 6);
    let barrel_inside_diameter_in = prompt_f64("Barrel inside diameter (in)", 22.9);
    let barrel_wall_thickness_in = prompt_f64("Barrel wall thickness (in, 0 = not modeled)", 0.05);
    let insulation_min_thickness_in =
        prompt_f64("Backup insulation min thickness (in, 0 = not modeled)", 3.5);
    let brick_thickness_in = prompt_f64("Brick thickness, radial (in)", 2.5);
    let brick_outer_face_in = prompt_f64("Brick outer face length (in)", 9.0);
    let saw_kerf_in = prompt_f64("Saw kerf (in)", 0.125);
    let exact_face = prompt_yes_no("Treat the outer face as exact rather than a maximum?", false);

    let policy = if exact_face {
        FacePolicy::Authoritative
    } else {
        FacePolicy::Derived
    };

    let spec = RingSpec {
        label: "CLI Ring".to_string(),
        brick_count,
        barrel_inside_diameter_in,
        barrel_wall_thickness_in,
        insulation_min_thickness_in,
        brick_thickness_in,
        brick_outer_face_in,
        saw_kerf_in,
    };

    match calculate(&spec, policy) {
        Ok(result) => {
            println!();
            print!("{}", text_report(&spec, &result));
            println!();

            let layout = ring_layout(&spec, &result);
            let template = cut_template(&spec, &result);
            if let Err(e) = svg::save(RING_LAYOUT_FILE, &layout)
                .and_then(|_| svg::save(CUT_TEMPLATE_FILE, &template))
            {
                eprintln!("Error writing diagrams: {e}");
                return ExitCode::FAILURE;
            }
            println!("Wrote {RING_LAYOUT_FILE} and {CUT_TEMPLATE_FILE}");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{json}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{json}");
            }
            ExitCode::FAILURE
        }
    }
}
