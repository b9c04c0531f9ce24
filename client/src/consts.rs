//! Client-side constants: external links, scripts and timings.

use std::time::Duration;

/// Hosted-notebook link; `{path}` receives the `.ipynb` location.
pub const COLAB_URL_TEMPLATE: &str =
    "https://colab.research.google.com/github/your-username/your-repo/blob/main{path}";

/// Source repository linked from the top navigation.
pub const REPOSITORY_URL: &str = "https://github.com/your-repo";

pub const APP_TITLE: &str = "NLP Assignment Viewer";

/// Kernel bootstrap library, loaded once by the document shell.
pub const THEBE_SCRIPT_URL: &str = "https://unpkg.com/thebe@0.8.2/lib/index.js";

/// Editor theme stylesheet matching `CodeMirrorConfig::theme`.
pub const CODEMIRROR_THEME_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/codemirror/5.65.16/theme/material-palenight.min.css";

/// How long a navigated-to cell stays highlighted.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(2000);
