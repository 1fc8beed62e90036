//! The shipped MindFlow NLP practitioner catalog.
//!
//! One free orientation module, a mandatory core that unlocks five
//! specializations, and quiz content for each.

use super::types::{Module, ModuleCode, ModuleLevel, QuizQuestion};

pub const ORIENTATION: &str = "ATMT_0.1";
pub const CORE: &str = "ATMT_1";
pub const SPECIALIZATIONS: [&str; 5] = ["ATMT_2", "ATMT_3", "ATMT_4", "ATMT_5", "ATMT_6"];

const PASSING_SCORE: u32 = 80;

fn codes(codes: &[&str]) -> Vec<ModuleCode> {
    codes.iter().map(|c| ModuleCode::new(*c)).collect()
}

fn question(id: &str, question: &str, options: [&str; 4], correct_answer: usize) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
    }
}

#[allow(clippy::too_many_arguments)]
fn specialization(
    code: &str,
    title: &str,
    description: &str,
    price: u32,
    early_bird_price: u32,
    display_order: u32,
    quiz: QuizQuestion,
) -> Module {
    Module {
        code: ModuleCode::new(code),
        title: title.to_string(),
        description: description.to_string(),
        level: ModuleLevel::Specialization,
        price,
        early_bird_price,
        prerequisite_modules: codes(&[CORE]),
        unlocks_modules: Vec::new(),
        passing_score: PASSING_SCORE,
        display_order,
        narration_url: None,
        quiz_questions: vec![quiz],
    }
}

/// Build the shipped module list, in display order.
pub fn builtin_modules() -> Vec<Module> {
    vec![
        Module {
            code: ModuleCode::new(ORIENTATION),
            title: "NLP Orientation".into(),
            description: "Foundation module covering NLP basics and clinical ethics. Mandatory for all tracks.".into(),
            level: ModuleLevel::Introduction,
            price: 0,
            early_bird_price: 0,
            prerequisite_modules: Vec::new(),
            unlocks_modules: codes(&[CORE]),
            passing_score: PASSING_SCORE,
            display_order: 1,
            narration_url: Some("https://samplelib.com/lib/preview/mp3/sample-3s.mp3".into()),
            quiz_questions: vec![
                question(
                    "q1",
                    "What is the primary goal of the MindFlow Orientation?",
                    [
                        "Selling products",
                        "Establishing ethical clinical boundaries",
                        "Learning to code",
                        "Counting breathing cycles",
                    ],
                    1,
                ),
                question(
                    "q2",
                    "Which is a core pillar of professional NLP?",
                    ["Rapport", "Sensory Awareness", "Outcome Thinking", "All of the above"],
                    3,
                ),
            ],
        },
        Module {
            code: ModuleCode::new(CORE),
            title: "5Why Empathy Framework".into(),
            description: "The mandatory core of the certification. Master root-cause empathy mapping.".into(),
            level: ModuleLevel::Mandatory,
            price: 399,
            early_bird_price: 319,
            prerequisite_modules: codes(&[ORIENTATION]),
            unlocks_modules: codes(&SPECIALIZATIONS),
            passing_score: PASSING_SCORE,
            display_order: 2,
            narration_url: None,
            quiz_questions: vec![
                question(
                    "q1",
                    "In the 5Why framework, \"Why\" is asked to...",
                    [
                        "Annoy the client",
                        "Peel back layers of superficial defense",
                        "Delay the session",
                        "Test the therapist's memory",
                    ],
                    1,
                ),
                question(
                    "q2",
                    "Which level of \"Why\" usually reveals core identity drivers?",
                    ["The first", "The second", "Levels 4 and 5", "None of them"],
                    2,
                ),
            ],
        },
        specialization(
            "ATMT_2",
            "Reframing Techniques",
            "Advanced specialization in cognitive shift and perspective transformation.",
            299,
            239,
            3,
            question(
                "q1",
                "What is the \"Context Reframe\"?",
                [
                    "Changing the meaning of the event",
                    "Finding a setting where a behavior is useful",
                    "Ignoring the context entirely",
                    "Moving the session outdoors",
                ],
                1,
            ),
        ),
        specialization(
            "ATMT_3",
            "Anchoring & State Control",
            "Clinical specialization in neuro-associative state management.",
            399,
            319,
            4,
            question(
                "q1",
                "An NLP anchor is successfully set when...",
                [
                    "The client is bored",
                    "Stimulus and high-intensity state are linked",
                    "The session ends",
                    "The client falls asleep",
                ],
                1,
            ),
        ),
        specialization(
            "ATMT_4",
            "Submodalities Mastery",
            "Fine-tuning internal representations for lasting psychological change.",
            499,
            399,
            5,
            question(
                "q1",
                "Changing an internal image from color to black-and-white is a change in...",
                ["Digital content", "Submodalities", "External reality", "Physical vision"],
                1,
            ),
        ),
        specialization(
            "ATMT_5",
            "Timeline Therapy",
            "Specialization in encoding time and healing past trauma footprints.",
            499,
            399,
            6,
            question(
                "q1",
                "Timeline therapy primarily works by...",
                [
                    "Buying a new watch",
                    "Changing the internal location of past/future events",
                    "Predicting the future",
                    "Writing a biography",
                ],
                1,
            ),
        ),
        specialization(
            "ATMT_6",
            "Neuro Associative Conditioning",
            "The final specialization track for behavioral neuro-patterning.",
            499,
            399,
            7,
            question(
                "q1",
                "NAC focuses on creating change by...",
                [
                    "Willpower alone",
                    "Conditioning new neural pathways via intensity",
                    "Reading more books",
                    "Taking notes",
                ],
                1,
            ),
        ),
    ]
}
