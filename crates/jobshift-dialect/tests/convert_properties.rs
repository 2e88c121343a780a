//! Property-based tests for job script conversion.
//!
//! Covers the behaviour that must hold for every pair of distinct
//! schedulers: empty input, untouched lines, environment rewriting outside
//! directives, and A → B → A round trips on unambiguous keys.

use jobshift_dialect::{
    ConvertedLine, Converter, DialectKey, REPLACED_MARKER, Scheduler, convert, tokens_for,
};
use proptest::prelude::*;

fn arb_scheduler() -> impl Strategy<Value = Scheduler> {
    prop::sample::select(Scheduler::ALL.to_vec())
}

/// Two different schedulers.
fn arb_pair() -> impl Strategy<Value = (Scheduler, Scheduler)> {
    (arb_scheduler(), arb_scheduler()).prop_filter("schedulers must differ", |(a, b)| a != b)
}

/// Lowercase text that cannot contain any flag or variable token.
fn arb_plain_text() -> impl Strategy<Value = String> {
    "[a-z0-9 ./=]{0,24}"
}

/// Environment keys whose tokens are distinct in every dialect and not
/// substrings of other variable tokens.
fn arb_unambiguous_env_key() -> impl Strategy<Value = DialectKey> {
    prop::sample::select(vec![
        DialectKey::EnvJobId,
        DialectKey::EnvSubmitDirectory,
        DialectKey::EnvSubmitHost,
    ])
}

/// Strip marker lines, keeping only what a scheduler would read.
fn without_markers(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|l| !l.starts_with(REPLACED_MARKER))
        .collect()
}

proptest! {
    #[test]
    fn empty_input_yields_empty_output((source, target) in arb_pair()) {
        let lines: Vec<String> = Vec::new();
        prop_assert!(convert(&lines, source, target).is_empty());
    }

    #[test]
    fn plain_lines_are_untouched(
        (source, target) in arb_pair(),
        lines in prop::collection::vec(arb_plain_text(), 0..8),
    ) {
        let out = convert(&lines, source, target);
        prop_assert_eq!(out, lines);
    }

    #[test]
    fn env_vars_rewritten_anywhere(
        (source, target) in arb_pair(),
        key in arb_unambiguous_env_key(),
        prefix in arb_plain_text(),
        suffix in arb_plain_text(),
    ) {
        let from = tokens_for(source).get(key);
        let to = tokens_for(target).get(key);
        let line = format!("{prefix}{from}{suffix}");

        let out = convert([line.as_str()], source, target);
        prop_assert_eq!(out.len(), 2);
        prop_assert_eq!(&out[0], &format!("{REPLACED_MARKER}{line}"));
        prop_assert_eq!(&out[1], &format!("{prefix}{to}{suffix}"));
    }

    #[test]
    fn env_round_trip(
        (a, b) in arb_pair(),
        key in arb_unambiguous_env_key(),
        prefix in arb_plain_text(),
    ) {
        let line = format!("{prefix}{}", tokens_for(a).get(key));

        let there = without_markers(convert([line.as_str()], a, b));
        let back = without_markers(convert(&there, b, a));
        prop_assert_eq!(back, vec![line]);
    }

    #[test]
    fn directive_with_flag_yields_two_lines(
        (source, target) in arb_pair(),
        value in "[a-z0-9]{1,8}",
    ) {
        // The queue flag is `-q` everywhere, so only the prefix changes.
        let line = format!("{} -q {value}", source.directive_prefix());
        let out = convert([line.as_str()], source, target);

        prop_assert_eq!(out.len(), 2);
        prop_assert_eq!(&out[0], &format!("{REPLACED_MARKER}{line}"));
        prop_assert_eq!(&out[1], &format!("{} -q {value}", target.directive_prefix()));
    }

    #[test]
    fn every_line_produces_one_or_two_lines(
        (source, target) in arb_pair(),
        lines in prop::collection::vec(".{0,40}", 0..8),
    ) {
        let conversion = Converter::new(source, target).convert_all(&lines);
        let rendered = conversion.render();
        prop_assert_eq!(rendered.len(), lines.len() + conversion.replaced_count());

        for (input, outcome) in lines.iter().zip(conversion.lines()) {
            match outcome {
                ConvertedLine::Unchanged(text) => prop_assert_eq!(text, input),
                ConvertedLine::Replaced { original, keys, .. } => {
                    prop_assert_eq!(original, input);
                    prop_assert!(!keys.is_empty());
                }
            }
        }
    }
}

#[test]
fn walltime_round_trip_pbs_slurm() {
    let line = "#PBS -l walltime=04:00:00";

    let slurm = without_markers(convert([line], Scheduler::Pbs, Scheduler::Slurm));
    assert_eq!(slurm, vec!["#SBATCH -t04:00:00"]);

    let pbs = without_markers(convert(&slurm, Scheduler::Slurm, Scheduler::Pbs));
    assert_eq!(pbs, vec![line]);
}

#[test]
fn full_script_pbs_to_slurm() {
    let script = [
        "#!/bin/bash",
        "#PBS -N solver",
        "#PBS -q normal",
        "#PBS -l walltime=12:00:00",
        "",
        "cd $PBS_O_WORKDIR",
        "mpirun -np 64 ./solver > log.$PBS_JOBID",
    ];

    let out = convert(script, Scheduler::Pbs, Scheduler::Slurm);
    assert_eq!(
        out,
        vec![
            "#!/bin/bash",
            "#(REPLACED) #PBS -N solver",
            "#SBATCH --job-name= solver",
            "#(REPLACED) #PBS -q normal",
            "#SBATCH -q normal",
            "#(REPLACED) #PBS -l walltime=12:00:00",
            "#SBATCH -t12:00:00",
            "",
            "#(REPLACED) cd $PBS_O_WORKDIR",
            "cd $SLURM_SUBMIT_DIR",
            "#(REPLACED) mpirun -np 64 ./solver > log.$PBS_JOBID",
            "mpirun -np 64 ./solver > log.$SLURM_JOBID",
        ]
    );
}

#[test]
fn full_script_lsf_to_sge() {
    let script = [
        "#BSUB -J build",
        "#BSUB -W 30",
        "#BSUB -u ops@example.org",
        "cat $LSB_DJOB_HOSTFILE",
    ];

    let out = convert(script, Scheduler::Lsf, Scheduler::Sge);
    assert_eq!(
        out,
        vec![
            "#(REPLACED) #BSUB -J build",
            "#$ -N build",
            "#(REPLACED) #BSUB -W 30",
            "#$ -l h_rt 30",
            // The email flag becomes -M, which lsf also uses for memory, and
            // memory is scanned later in the same pass.
            "#(REPLACED) #BSUB -u ops@example.org",
            "#$ -l mem_free= ops@example.org",
            "#(REPLACED) cat $LSB_DJOB_HOSTFILE",
            "cat $PE_HOSTFILE",
        ]
    );
}
