//! The uplatex report template

/// Placeholder replaced by the document title
pub const TITLE_PLACEHOLDER: &str = "{{title}}";

/// Placeholder replaced by the author name
pub const AUTHOR_PLACEHOLDER: &str = "{{author}}";

const REPORT_TEMPLATE: &str = r"\documentclass[a4paper,11pt,uplatex,dvipdfmx]{jsarticle}

\usepackage{amsmath,amssymb}
\usepackage{graphicx}
\usepackage{here}
\usepackage{url}

\title{{{title}}}
\author{{{author}}}
\date{\today}

\begin{document}

\maketitle

\section{}

\end{document}
";

/// Render the report template with `title` and `author` substituted.
///
/// Only the two placeholders are replaced; every other brace group in the
/// template is emitted as is.
pub fn render(title: &str, author: &str) -> String {
    // Single pass so a title containing the author placeholder stays literal.
    let mut output = String::with_capacity(REPORT_TEMPLATE.len() + title.len() + author.len());
    let mut rest = REPORT_TEMPLATE;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(TITLE_PLACEHOLDER) {
            output.push_str(title);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(AUTHOR_PLACEHOLDER) {
            output.push_str(author);
            rest = after;
        } else {
            output.push('{');
            rest = &tail[1..];
        }
    }
    output.push_str(rest);

    output
}
