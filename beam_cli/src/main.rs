//! # Beam Verification CLI
//!
//! Terminal interface for the beam_core engine: collects the beam, load and
//! material inputs, sweeps the built-in catalog for the lightest passing
//! section and prints a detailed report for it, followed by a JSON dump for
//! programmatic use.

use std::io::{self, BufRead, Write};

use beam_core::beam::{BeamConfiguration, LoadCase, SupportCondition};
use beam_core::catalog::builtin_catalog;
use beam_core::factors::DesignFactors;
use beam_core::material::{Material, SteelGrade};
use beam_core::optimizer::optimize;
use beam_core::units::{Centimeters, KnPerCm, KnPerM, Meters};
use beam_core::verification::{BeamCheckInput, DesignForces, SectionCheck, Status};

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

fn prompt_choice(prompt: &str, max: usize, default: usize) -> usize {
    let value = prompt_f64(prompt, default as f64) as usize;
    if (1..=max).contains(&value) {
        value
    } else {
        default
    }
}

fn main() {
    println!("Girder CLI - Steel Beam Verification (NBR 8800)");
    println!("===============================================");
    println!();

    for (index, support) in SupportCondition::ALL.iter().enumerate() {
        println!("  {}. {}", index + 1, support);
    }
    let support = SupportCondition::ALL[prompt_choice("Support condition [1]: ", 4, 1) - 1];

    let span: Centimeters = Meters(prompt_f64("Span (m) [5.0]: ", 5.0)).into();
    let w: KnPerCm = KnPerM(prompt_f64("Uniform service load (kN/m) [5.0]: ", 5.0)).into();
    let p_kn = prompt_f64("Point load (kN, 0 for none) [0.0]: ", 0.0);

    let mut loads = LoadCase::uniform(w.0);
    if p_kn > 0.0 {
        let x: Centimeters =
            Meters(prompt_f64("Point load position from left/fixed end (m): ", 0.0)).into();
        loads = loads.with_point(p_kn, x.0);
    }

    println!();
    for (index, grade) in SteelGrade::ALL.iter().enumerate() {
        println!("  {}. {}", index + 1, grade);
    }
    let grade = SteelGrade::ALL[prompt_choice("Steel grade [1]: ", 4, 1) - 1];

    let load_factor = prompt_f64("Load factor [1.4]: ", 1.4);
    let divisor = prompt_f64("Deflection limit divisor n (L/n) [350]: ", 350.0);
    let lb = prompt_f64("Unbraced length (m, 0 = full span) [0]: ", 0.0);
    let stiffener = prompt_f64("Stiffener spacing (cm, 0 for none) [0]: ", 0.0);

    let input = BeamCheckInput {
        beam: BeamConfiguration {
            support,
            span_cm: span.0,
        },
        loads,
        forces: DesignForces::FromLoads { load_factor },
        material: Material::from_grade(grade),
        unbraced_length_cm: (lb > 0.0).then(|| Centimeters::from(Meters(lb)).0),
        cb: None,
        stiffener_spacing_cm: (stiffener > 0.0).then_some(stiffener),
        deflection_limit_divisor: divisor,
    };

    let factors = DesignFactors::default();

    match optimize(builtin_catalog(), &input, &factors) {
        Ok(report) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  CATALOG SWEEP");
            println!("═══════════════════════════════════════");
            for category in &report.categories {
                println!(
                    "  {:<12} {} pass / {} fail / {} skipped",
                    category.name,
                    category.passing.len(),
                    category.failing.len(),
                    category.skipped.len()
                );
            }

            match report.lightest() {
                Some(best) => {
                    print_detailed(best);
                    println!();
                    println!("JSON Output (for programmatic use):");
                    if let Ok(json) = serde_json::to_string_pretty(best) {
                        println!("{}", json);
                    }
                }
                None => {
                    println!();
                    println!("No section in the catalog satisfies the demand.");
                }
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

fn print_detailed(check: &SectionCheck) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  LIGHTEST PASSING SECTION: {}", check.section.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Demand:");
    println!("  Msd = {:.1} kN·cm", check.demand.msd_kncm);
    println!("  Vsd = {:.1} kN", check.demand.vsd_kn);
    if let Some(deflection) = check.demand.deflection_cm {
        println!("  δ   = {:.3} cm", deflection);
    }
    println!();
    println!("Flexural capacities (Cb = {:.3}):", check.cb_used);
    for capacity in [&check.flexure.flt, &check.flexure.flm, &check.flexure.fla] {
        println!(
            "  {}: Mrd = {:.1} kN·cm  [{}; λ={:.1}, λp={:.1}, λr={:.1}]",
            capacity.mode.code(),
            capacity.mrd_kncm,
            capacity.regime().display_name(),
            capacity.lambda,
            capacity.lambda_p,
            capacity.lambda_r,
        );
    }
    println!(
        "  Shear: Vrd = {:.1} kN  [{}; λ={:.1}, λp={:.1}, kv={:.1}]",
        check.shear.vrd_kn,
        check.shear.regime.display_name(),
        check.shear.lambda,
        check.shear.lambda_p,
        check.shear.kv,
    );
    println!();
    println!("Checks:");
    println!(
        "  Moment:     {:>6.1}%  {}",
        check.moment_check.efficiency_pct, check.moment_check.status
    );
    println!(
        "  Shear:      {:>6.1}%  {}",
        check.shear_check.efficiency_pct, check.shear_check.status
    );
    match &check.deflection_check {
        Some(deflection) => println!(
            "  Deflection: {:>6.1}%  {}",
            deflection.efficiency_pct, deflection.status
        ),
        None => println!("  Deflection: n/a (forces specified directly)"),
    }
    for note in &check.notes {
        println!("  Note: {}", note);
    }
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {} (worst efficiency {:.1}%)",
        if check.overall == Status::Pass {
            "PASS"
        } else {
            "FAIL"
        },
        check.governing_efficiency_pct()
    );
    println!("═══════════════════════════════════════");
}
