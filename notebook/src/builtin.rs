//! Assignments shipped with the viewer.
//!
//! Kernel addresses can be overridden when the crate is compiled by setting
//! `ASSIGNMENT_1_KERNEL_URL` / `ASSIGNMENT_4_KERNEL_URL`. An empty override
//! switches the entry to proxied mode (backend served from the page origin).

use crate::catalog::{CatalogEntry, Outline, Section};

fn kernel_url(build_override: Option<&str>, default: &str) -> Option<String> {
    match build_override {
        Some("") => None,
        Some(url) => Some(url.to_owned()),
        None => Some(default.to_owned()),
    }
}

pub(crate) fn entries() -> Vec<CatalogEntry> {
    vec![prefix_expansion(), ngram_language_models()]
}

fn prefix_expansion() -> CatalogEntry {
    CatalogEntry {
        slug: "bayes-sentimentanalysis".to_owned(),
        id: "assignment_1".to_owned(),
        title: "Prefix Expansion".to_owned(),
        description: "Build an autocomplete system using frequency-based word rankings from Shakespeare text"
            .to_owned(),
        week: 1,
        notebook_url: "/assignments/assignment_1/assignment_1.ipynb".to_owned(),
        // Container ships an nginx CORS proxy on 8888.
        kernel_url: kernel_url(option_env!("ASSIGNMENT_1_KERNEL_URL"), "http://localhost:8888"),
        outline: Outline {
            title: "Prefix Expansion".to_owned(),
            sections: vec![
                Section {
                    name: "Data Prep".to_owned(),
                    cell_id: Some("c8a63d33".to_owned()),
                    subsections: vec![Section::leaf("Cleaning", "c8a63d33"), Section::leaf("Tokenization", "c8a63d33")],
                },
                Section::leaf("Tokenization", "c8a63d33"),
                Section::leaf("Model Training", "c8a63d33"),
                Section::leaf("Autocomplete Prediction", "8f88d040"),
                Section::leaf("Test Examples", "790e9d15"),
                Section::leaf("Interactive Widget", "dff5f361"),
            ],
        },
    }
}

fn ngram_language_models() -> CatalogEntry {
    CatalogEntry {
        slug: "ngram-language-models".to_owned(),
        id: "assignment_4".to_owned(),
        title: "N-gram Language Models".to_owned(),
        description: "Build probabilistic language models with smoothing and interpolation techniques".to_owned(),
        week: 5,
        notebook_url: "/assignments/assignment_4/assignment_4.ipynb".to_owned(),
        // 8890 so it can run next to assignment 1.
        kernel_url: kernel_url(option_env!("ASSIGNMENT_4_KERNEL_URL"), "http://localhost:8890"),
        outline: Outline {
            title: "N-gram Language Models".to_owned(),
            sections: vec![
                Section::group(
                    "Data Prep",
                    vec![Section::leaf("Corpus Loading", "cell-3"), Section::leaf("Vocabulary Building", "cell-6")],
                ),
                Section::group(
                    "Feature Extraction",
                    vec![Section::leaf("N-gram Extraction", "cell-3"), Section::leaf("Count Statistics", "cell-3")],
                ),
                Section::group(
                    "Model Training",
                    vec![
                        Section::leaf("Probability Estimation", "cell-4"),
                        Section::leaf("Smoothing (Laplace)", "cell-6"),
                        Section::leaf("Smoothing (Add-k)", "cell-10"),
                        Section::leaf("Interpolation", "cell-12"),
                    ],
                ),
                Section::group(
                    "Evaluation & Fine-tuning",
                    vec![Section::leaf("Perplexity", "cell-8"), Section::leaf("Hyperparameter Tuning", "cell-10")],
                ),
                Section::group("Deployment & Inference", vec![Section::leaf("Pipeline Demo", "cell-14")]),
            ],
        },
    }
}
