//! # MohrLab CLI Application
//!
//! Terminal front end for the plane-stress engine. Prompts for the stress
//! state and section angle, then prints the transformed stresses, the
//! principal stresses, and the Mohr's circle parameters, followed by the
//! JSON form of the result for scripting.

use std::io::{self, BufRead, Write};

use stress_core::calculations::plane_stress::{calculate, PlaneStressInput};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("MohrLab CLI - Plane-Stress / Mohr's Circle Calculator");
    println!("=====================================================");
    println!();
    println!("Stresses in MPa, section angle in degrees.");
    println!("Defaults describe a typical aircraft wing-skin panel.");
    println!();

    let sigma_x = prompt_f64("Normal stress σx (MPa) [80.0]: ", 80.0);
    let sigma_y = prompt_f64("Normal stress σy (MPa) [-20.0]: ", -20.0);
    let tau_xy = prompt_f64("Shear stress τxy (MPa) [40.0]: ", 40.0);
    let alpha_deg = prompt_f64("Section angle α (deg) [0.0]: ", 0.0);

    let input = PlaneStressInput {
        label: "CLI".to_string(),
        sigma_x_mpa: sigma_x,
        sigma_y_mpa: sigma_y,
        tau_xy_mpa: tau_xy,
        alpha_deg,
    };

    match calculate(&input) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  PLANE-STRESS ANALYSIS RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  σx  = {:.1} MPa", input.sigma_x_mpa);
            println!("  σy  = {:.1} MPa", input.sigma_y_mpa);
            println!("  τxy = {:.1} MPa", input.tau_xy_mpa);
            println!("  α   = {:.1}°", input.alpha_deg);
            println!();
            println!("Stresses on the rotated section:");
            println!("  σα = {:.2} MPa", result.sigma_alpha_mpa);
            println!("  τα = {:.2} MPa", result.tau_alpha_mpa);
            println!();
            println!("Extrema:");
            println!("  σ1   = {:.2} MPa", result.sigma_1_mpa);
            println!("  σ3   = {:.2} MPa", result.sigma_3_mpa);
            println!("  τmax = {:.2} MPa", result.tau_max_mpa);
            println!();
            println!("Mohr's circle:");
            println!("  center = ({:.2}, 0) MPa", result.center_mpa);
            println!("  radius = {:.2} MPa", result.radius_mpa);
            if result.is_point_circle() {
                println!("  (point circle: same stresses on every section)");
            }
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for scripting/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
