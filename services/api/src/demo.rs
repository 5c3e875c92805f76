use crate::infra::parse_variant;
use clap::Args;
use disc_assessment::assessment::{
    describe, import_responses_from_path, AssessmentService, AssessmentServiceError, BankVariant,
    BankView, QuestionBank, Response, ScoredAssessment, ScoringEngine, TraitDimension,
};
use disc_assessment::config::AppConfig;
use disc_assessment::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV export with `most_like,least_like` columns and an optional `question_id` column
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Bank variant to score against (long or short). Defaults to APP_ASSESSMENT_VARIANT.
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<BankVariant>,
    /// Score against a custom JSON bank instead of a built-in one
    #[arg(long)]
    pub(crate) bank: Option<PathBuf>,
    /// Print the scored assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BankArgs {
    /// Bank variant to list (long or short). Defaults to APP_ASSESSMENT_VARIANT.
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<BankVariant>,
    /// Print the bank as JSON, without option weights
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Bank variant to run the demo against (long or short). Defaults to APP_ASSESSMENT_VARIANT.
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<BankVariant>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        responses,
        variant,
        bank,
        json,
    } = args;

    let scored = match bank {
        Some(path) => {
            let bank = QuestionBank::from_path(path)?;
            let answers = import_responses_from_path(responses, &bank)?;
            let engine = ScoringEngine::for_variant(variant.unwrap_or(bank.variant()));
            let result = engine
                .score(&bank, &answers)
                .map_err(AssessmentServiceError::from)?;
            ScoredAssessment {
                description: describe(&result.profile),
                result,
            }
        }
        None => {
            let service = service_for(variant)?;
            let variant = service.default_variant();
            let answers = import_responses_from_path(responses, service.bank(variant))?;
            service.score(variant, &answers)?
        }
    };

    if json {
        match serde_json::to_string_pretty(&scored) {
            Ok(payload) => println!("{}", payload),
            Err(err) => println!("Scored assessment unavailable as JSON: {}", err),
        }
    } else {
        render_scored(&scored);
    }

    Ok(())
}

pub(crate) fn run_bank_listing(args: BankArgs) -> Result<(), AppError> {
    let service = service_for(args.variant)?;
    let bank = service.bank(service.default_variant());

    if args.json {
        match serde_json::to_string_pretty(&BankView::from(bank)) {
            Ok(payload) => println!("{}", payload),
            Err(err) => println!("Bank unavailable as JSON: {}", err),
        }
        return Ok(());
    }

    println!(
        "{} bank {} ({} questions)",
        bank.variant().label(),
        bank.version(),
        bank.len()
    );
    for (position, question) in bank.questions().iter().enumerate() {
        println!("\n{:>2}. [{}] {}", position + 1, question.id, question.prompt);
        for (index, option) in question.options.iter().enumerate() {
            println!("    {}) {}", index, option.label);
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = service_for(args.variant)?;
    let variant = service.default_variant();
    let bank = service.bank(variant);

    println!(
        "DISC assessment demo: {} bank {} ({} questions)",
        variant.label(),
        bank.version(),
        bank.len()
    );

    for (name, responses) in synthetic_respondents(bank) {
        println!("\n=== {} ===", name);
        match service.score(variant, &responses) {
            Ok(scored) => render_scored(&scored),
            Err(err) => println!("  Submission rejected: {}", err),
        }
    }

    Ok(())
}

/// Builds the service with `requested` as its default, falling back to the configured variant.
fn service_for(requested: Option<BankVariant>) -> Result<AssessmentService, AppError> {
    let variant = match requested {
        Some(variant) => variant,
        None => AppConfig::load()?.assessment.default_variant,
    };
    Ok(AssessmentService::new(variant))
}

pub(crate) fn render_scored(scored: &ScoredAssessment) {
    let result = &scored.result;
    let description = &scored.description;

    println!(
        "{} {} (primary {}, secondary {})",
        description.emoji,
        description.label,
        description.primary.label(),
        description.secondary.label()
    );
    println!("Bank: {} {}", result.variant.label(), result.bank_version);

    println!("\nProfile");
    for (dimension, value) in result.profile.ranked() {
        println!(
            "- {} {:<18} {:>3}% {}",
            dimension.letter(),
            dimension.label(),
            value,
            "#".repeat(usize::from(value) / 5)
        );
    }

    println!("\nValidity");
    println!(
        "- validity {} | consistency {} | social desirability {}",
        result.validity.validity_score,
        result.validity.consistency_score,
        result.validity.social_desirability_score
    );
    println!(
        "- reliable: {} | points awarded: {}",
        if result.validity.is_reliable { "yes" } else { "no" },
        result.points_awarded
    );
    if result.anomalies.is_empty() {
        println!("- answer patterns: none flagged");
    } else {
        for anomaly in &result.anomalies {
            println!("- answer pattern flagged: {}", anomaly.label());
        }
    }

    print_list("Strengths", &description.strengths);
    print_list("Challenges", &description.challenges);
    print_list("Ideal environment", &description.ideal_environment);
    print_list("Motivators", &description.motivators);
}

fn print_list(title: &str, entries: &[String]) {
    println!("\n{}", title);
    for entry in entries {
        println!("- {}", entry);
    }
}

fn synthetic_respondents(bank: &QuestionBank) -> Vec<(&'static str, Vec<Response>)> {
    let genuine = consistent_respondent(
        bank,
        &[
            TraitDimension::Influence,
            TraitDimension::Conscientiousness,
            TraitDimension::Steadiness,
            TraitDimension::Steadiness,
        ],
    );

    let mut endorser = genuine.clone();
    if let Some(position) = bank
        .social_desirability_probe()
        .and_then(|probe| bank.position_of(probe))
    {
        endorser[position].most_like = 0;
    }

    let straight_liner = vec![Response::new(0, 3); bank.len()];
    let zigzag = (0..bank.len())
        .map(|position| Response::new(position % 2, 3))
        .collect();

    vec![
        ("Consistent respondent", genuine),
        ("Claims to be flawless", endorser),
        ("Straight-liner", straight_liner),
        ("Zigzag clicker", zigzag),
    ]
}

/// Cycles through `preference` and repeats the original's trait on every validation question.
fn consistent_respondent(bank: &QuestionBank, preference: &[TraitDimension]) -> Vec<Response> {
    let mut chosen: Vec<TraitDimension> = Vec::with_capacity(bank.len());
    let mut responses = Vec::with_capacity(bank.len());

    for (position, question) in bank.questions().iter().enumerate() {
        let echoed = bank
            .validation_pairs()
            .iter()
            .find(|pair| pair.validation == question.id)
            .and_then(|pair| bank.position_of(&pair.original))
            .and_then(|original| chosen.get(original).copied());
        let most = echoed.unwrap_or(preference[position % preference.len()]);
        let least = TraitDimension::ALL[(most as usize + 2) % TraitDimension::ALL.len()];

        let index_of = |dimension: TraitDimension| {
            question
                .options
                .iter()
                .position(|option| option.weights.dominant() == dimension)
                .unwrap_or(0)
        };

        chosen.push(most);
        responses.push(Response::new(index_of(most), index_of(least)));
    }

    responses
}
