use crate::catalog::{self, Category, OptionKind, OptionSpec, TemplateDescriptor};
use crate::generate::CssLayout;
use crate::options::LayoutOptions;
use crate::preview::{html_escape, preview_for};

use super::css::PAGE_CSS;

fn wrap_page(title: &str, body: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{PAGE_CSS}
</style>
</head>
<body>
<div class="header">
  <a class="title" href="/">Layout Catalog</a>
  <span class="count">{count} templates</span>
</div>
{body}
</body>
</html>"##,
        title = html_escape(title),
        count = catalog::all().len(),
    )
}

/// Gallery view: every template grouped by category.
pub(super) fn build_gallery_page() -> String {
    let mut body = String::from(r#"<div class="gallery"><h2>Select a Template</h2>"#);
    for category in Category::ALL {
        body.push_str(&format!(
            r#"<div class="group"><h3>{}</h3><div class="cards">"#,
            category.label()
        ));
        for t in catalog::by_category(category) {
            body.push_str(&build_card(t));
        }
        body.push_str("</div></div>");
    }
    body.push_str("</div>");
    wrap_page("Layout Catalog", &body)
}

fn build_card(t: &TemplateDescriptor) -> String {
    format!(
        r#"<a class="card" href="/template/{id}">
  <div class="thumb">{category}</div>
  <div class="meta"><div class="name">{name}</div><div class="desc">{desc}</div></div>
</a>"#,
        id = html_escape(t.id),
        category = t.category,
        name = html_escape(t.name),
        desc = html_escape(t.description),
    )
}

/// Selected view: options form, CSS/HTML tabs and the live preview.
pub(super) fn build_template_page(
    t: &TemplateDescriptor,
    options: &LayoutOptions,
    layout: &CssLayout,
) -> String {
    let css = html_escape(&layout.combined_css());
    let html = html_escape(&layout.html);
    let srcdoc = html_escape(&preview_for(layout));
    let form = build_options_form(t, options);

    let body = format!(
        r##"<div class="selected">
  <div>
    <div class="selected-head">
      <div><h2>{name}</h2><p>{desc}</p></div>
      <a class="back" href="/">Choose Another Template</a>
    </div>
    <div class="panel" style="margin-top:24px">
      <div class="panel-label">Options</div>
      {form}
    </div>
    <div class="panel" style="margin-top:24px">
      <div class="tabs">
        <button class="active" data-tab="css">CSS</button>
        <button data-tab="html">HTML</button>
        <button class="copy" title="Copy to clipboard">Copy</button>
      </div>
      <pre class="code active" id="code-css">{css}</pre>
      <pre class="code" id="code-html">{html}</pre>
    </div>
  </div>
  <div class="panel frame">
    <div class="panel-label">Preview</div>
    <iframe title="Layout Preview" sandbox="allow-same-origin allow-scripts" srcdoc="{srcdoc}"></iframe>
  </div>
</div>
<script>
  let active = 'css';
  document.querySelectorAll('.tabs [data-tab]').forEach((btn) => {{
    btn.addEventListener('click', () => {{
      active = btn.dataset.tab;
      document.querySelectorAll('.tabs [data-tab]').forEach((b) => b.classList.toggle('active', b === btn));
      document.querySelectorAll('.code').forEach((c) => c.classList.toggle('active', c.id === 'code-' + active));
    }});
  }});
  document.querySelector('.tabs .copy').addEventListener('click', (e) => {{
    navigator.clipboard.writeText(document.getElementById('code-' + active).textContent);
    e.target.textContent = 'Copied';
    setTimeout(() => {{ e.target.textContent = 'Copy'; }}, 2000);
  }});
</script>"##,
        name = html_escape(t.name),
        desc = html_escape(t.description),
    );
    wrap_page(t.name, &body)
}

fn build_options_form(t: &TemplateDescriptor, options: &LayoutOptions) -> String {
    if t.options.is_empty() {
        return r#"<div class="options"><span class="none">This template has no options.</span></div>"#
            .to_string();
    }
    let fields: String = t.options.iter().map(|opt| build_option_field(opt, options)).collect();
    format!(
        r#"<form class="options" method="get" action="/template/{id}">
{fields}<button type="submit">Apply</button>
</form>"#,
        id = html_escape(t.id),
    )
}

fn build_option_field(opt: &OptionSpec, options: &LayoutOptions) -> String {
    let key = html_escape(opt.key);
    let current = options.get(opt.key).map(|v| v.to_string()).unwrap_or_default();
    let input = match opt.kind {
        OptionKind::Text => format!(
            r#"<input type="text" name="{key}" placeholder="{placeholder}" value="{value}">"#,
            placeholder = html_escape(opt.default),
            value = html_escape(&current),
        ),
        OptionKind::Flag => format!(
            r#"<input type="checkbox" name="{key}" value="true"{checked}>"#,
            checked = if options.flag(opt.key) { " checked" } else { "" },
        ),
        OptionKind::Choice => {
            let mut select = format!(r#"<select name="{key}"><option value="">default</option>"#);
            for choice in opt.choices {
                let selected = if options.is(opt.key, choice) { " selected" } else { "" };
                select.push_str(&format!(
                    r#"<option value="{c}"{selected}>{c}</option>"#,
                    c = html_escape(choice),
                ));
            }
            select.push_str("</select>");
            select
        }
    };
    format!("<label><span class=\"key\">{key}</span>{input}</label>\n")
}

pub(super) fn build_error_page(status: u16, message: &str) -> String {
    let body = format!(
        r#"<div class="error">
  <div class="status">{status}</div>
  <p>{message}</p>
  <a class="back" href="/">Back to gallery</a>
</div>"#,
        message = html_escape(message),
    );
    wrap_page(&format!("{status}"), &body)
}
