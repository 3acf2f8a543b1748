//! Grid templates: column systems, page scaffolds and card/masonry grids.

use super::CssLayout;
use crate::options::LayoutOptions;

pub(super) fn generate(template_id: &str, options: &LayoutOptions) -> CssLayout {
    match template_id {
        "12-span-grid" => twelve_span_grid(options),
        "3x3" => three_by_three(options),
        "holy-grail" => holy_grail(options),
        "sidebar" => sidebar(options),
        "header-main-footer" => header_main_footer(),
        "card-grid" => card_grid(options),
        "masonry" => masonry(options),
        "two-column" => two_column(options),
        "hierarchy" => hierarchy(options),
        _ => CssLayout::empty(),
    }
}

fn twelve_span_grid(options: &LayoutOptions) -> CssLayout {
    let gap = options.text_or("gap", "1rem");
    CssLayout::new(
        format!(
            r##"
.container {{
  display: grid;
  grid-template-columns: repeat(12, 1fr);
  gap: {gap};
  width: 100%;
}}"##
        ),
        r##"
.span-12 { grid-column: span 12 / span 12; }
.span-6 { grid-column: span 6 / span 6; }
.span-4 { grid-column: span 4 / span 4; }
.span-3 { grid-column: span 3 / span 3; }
.span-2 { grid-column: span 2 / span 2; }
.span-1 { grid-column: span 1 / span 1; }"##
            .to_string(),
        r##"
<div class="container">
  <div class="span-12">Full width</div>
  <div class="span-6">Half width</div>
  <div class="span-4">One third</div>
  <div class="span-2">One sixth</div>
</div>"##
            .to_string(),
    )
}

fn three_by_three(options: &LayoutOptions) -> CssLayout {
    let gap = options.text_or("gap", "1rem");
    CssLayout::new(
        format!(
            r##"
.grid-container {{
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  grid-template-rows: repeat(3, 1fr);
  gap: {gap};
  width: 100%;
}}"##
        ),
        r##"
.grid-item {
  min-height: 100px;
  background-color: #f8f8f8;
  display: flex;
  align-items: center;
  justify-content: center;
}"##
            .to_string(),
        r##"
<div class="grid-container">
  <div class="grid-item">1</div>
  <div class="grid-item">2</div>
  <div class="grid-item">3</div>
  <div class="grid-item">4</div>
  <div class="grid-item">5</div>
  <div class="grid-item">6</div>
  <div class="grid-item">7</div>
  <div class="grid-item">8</div>
  <div class="grid-item">9</div>
</div>"##
            .to_string(),
    )
}

fn holy_grail(options: &LayoutOptions) -> CssLayout {
    let nav_width = options.text_or("navWidth", "200px");
    let sidebar_width = options.text_or("sidebarWidth", "200px");
    let gap = options.text_or("gap", "1rem");
    CssLayout::new(
        format!(
            r##"
.holy-grail {{
  display: grid;
  grid-template-areas:
    "header header header"
    "nav content sidebar"
    "footer footer footer";
  grid-template-rows: auto 1fr auto;
  grid-template-columns: {nav_width} 1fr {sidebar_width};
  min-height: 100vh;
  gap: {gap};
}}"##
        ),
        r##"
.header { grid-area: header; }
.nav { grid-area: nav; }
.content { grid-area: content; }
.sidebar { grid-area: sidebar; }
.footer { grid-area: footer; }

/* Responsive adjustment */
@media (max-width: 768px) {
  .holy-grail {
    grid-template-areas:
      "header"
      "nav"
      "content"
      "sidebar"
      "footer";
    grid-template-columns: 1fr;
    grid-template-rows: auto auto 1fr auto auto;
  }
}"##
            .to_string(),
        r##"
<div class="holy-grail">
  <header class="header">Header</header>
  <nav class="nav">Navigation</nav>
  <main class="content">Main Content</main>
  <aside class="sidebar">Sidebar</aside>
  <footer class="footer">Footer</footer>
</div>"##
            .to_string(),
    )
}

fn sidebar(options: &LayoutOptions) -> CssLayout {
    let sidebar_width = options.text_or("sidebarWidth", "250px");
    let gap = options.text_or("gap", "0");
    CssLayout::new(
        format!(
            r##"
.sidebar-layout {{
  display: grid;
  grid-template-columns: {sidebar_width} 1fr;
  min-height: 100vh;
  gap: {gap};
}}"##
        ),
        r##"
.sidebar {
  background-color: #f5f5f5;
  padding: 1rem;
}

.main-content {
  padding: 1rem;
}

/* Responsive adjustment */
@media (max-width: 768px) {
  .sidebar-layout {
    grid-template-columns: 1fr;
  }
  
  .sidebar {
    display: none;
  }
}"##
            .to_string(),
        r##"
<div class="sidebar-layout">
  <aside class="sidebar">Sidebar Content</aside>
  <main class="main-content">Main Content</main>
</div>"##
            .to_string(),
    )
}

fn header_main_footer() -> CssLayout {
    CssLayout::new(
        r##"
.page-layout {
  display: grid;
  grid-template-rows: auto 1fr auto;
  min-height: 100vh;
}"##
            .to_string(),
        r##"
.header {
  padding: 1rem;
  background-color: #f5f5f5;
}

.main-content {
  padding: 1rem;
}

.footer {
  padding: 1rem;
  background-color: #f5f5f5;
}"##
            .to_string(),
        r##"
<div class="page-layout">
  <header class="header">Header</header>
  <main class="main-content">Main Content</main>
  <footer class="footer">Footer</footer>
</div>"##
            .to_string(),
    )
}

fn card_grid(options: &LayoutOptions) -> CssLayout {
    let min_width = options.text_or("minWidth", "250px");
    let gap = options.text_or("gap", "1.5rem");
    let image_height = options.text_or("imageHeight", "200px");
    CssLayout::new(
        format!(
            r##"
.card-grid {{
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax({min_width}, 1fr));
  gap: {gap};
  width: 100%;
}}"##
        ),
        format!(
            r##"
.card {{
  background-color: white;
  border-radius: 0.5rem;
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
  overflow: hidden;
}}

.card-image {{
  width: 100%;
  height: {image_height};
  object-fit: cover;
}}

.card-content {{
  padding: 1rem;
}}"##
        ),
        r##"
<div class="card-grid">
  <div class="card">
    <img class="card-image" src="https://via.placeholder.com/300x200" alt="Card image">
    <div class="card-content">
      <h3>Card Title</h3>
      <p>Card description text goes here.</p>
    </div>
  </div>
  <div class="card">
    <img class="card-image" src="https://via.placeholder.com/300x200" alt="Card image">
    <div class="card-content">
      <h3>Card Title</h3>
      <p>Card description text goes here.</p>
    </div>
  </div>
  <div class="card">
    <img class="card-image" src="https://via.placeholder.com/300x200" alt="Card image">
    <div class="card-content">
      <h3>Card Title</h3>
      <p>Card description text goes here.</p>
    </div>
  </div>
  <div class="card">
    <img class="card-image" src="https://via.placeholder.com/300x200" alt="Card image">
    <div class="card-content">
      <h3>Card Title</h3>
      <p>Card description text goes here.</p>
    </div>
  </div>
</div>"##
            .to_string(),
    )
}

fn masonry(options: &LayoutOptions) -> CssLayout {
    let columns = options.text_or("columns", "3");
    let row_height = options.text_or("rowHeight", "20px");
    let gap = options.text_or("gap", "1rem");
    CssLayout::new(
        format!(
            r##"
.masonry-grid {{
  display: grid;
  grid-template-columns: repeat({columns}, 1fr);
  grid-auto-rows: {row_height};
  gap: {gap};
}}"##
        ),
        r##"
.masonry-item {
  overflow: hidden;
  border-radius: 0.5rem;
}

.masonry-item:nth-child(1) { grid-row: span 8; }
.masonry-item:nth-child(2) { grid-row: span 10; }
.masonry-item:nth-child(3) { grid-row: span 6; }
.masonry-item:nth-child(4) { grid-row: span 9; }
.masonry-item:nth-child(5) { grid-row: span 7; }
.masonry-item:nth-child(6) { grid-row: span 5; }

.masonry-item img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* Responsive adjustment */
@media (max-width: 768px) {
  .masonry-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 480px) {
  .masonry-grid {
    grid-template-columns: 1fr;
  }
}"##
            .to_string(),
        r##"
<div class="masonry-grid">
  <div class="masonry-item">
    <img src="https://source.unsplash.com/random/1" alt="Masonry item">
  </div>
  <div class="masonry-item">
    <img src="https://source.unsplash.com/random/2" alt="Masonry item">
  </div>
  <div class="masonry-item">
    <img src="https://source.unsplash.com/random/3" alt="Masonry item">
  </div>
  <div class="masonry-item">
    <img src="https://source.unsplash.com/random/4" alt="Masonry item">
  </div>
  <div class="masonry-item">
    <img src="https://source.unsplash.com/random/5" alt="Masonry item">
  </div>
  <div class="masonry-item">
    <img src="https://source.unsplash.com/random/6" alt="Masonry item">
  </div>
</div>"##
            .to_string(),
    )
}

fn two_column(options: &LayoutOptions) -> CssLayout {
    let left_width = options.text_or("leftWidth", "1fr");
    let right_width = options.text_or("rightWidth", "1fr");
    let gap = options.text_or("gap", "2rem");
    CssLayout::new(
        format!(
            r##"
.two-column {{
  display: grid;
  grid-template-columns: {left_width} {right_width};
  gap: {gap};
  width: 100%;
}}"##
        ),
        r##"
.column {
  /* Optional column styling */
}

/* Responsive adjustment */
@media (max-width: 768px) {
  .two-column {
    grid-template-columns: 1fr;
  }
}"##
            .to_string(),
        r##"
<div class="two-column">
  <div class="column">
    <h2>First Column</h2>
    <p>Content for the first column goes here.</p>
  </div>
  <div class="column">
    <h2>Second Column</h2>
    <p>Content for the second column goes here.</p>
  </div>
</div>"##
            .to_string(),
    )
}

fn hierarchy(options: &LayoutOptions) -> CssLayout {
    let gap = options.text_or("gap", "1rem");
    let sidebar_width = options.text_or("sidebarWidth", "250px");
    let content_min_height = options.text_or("contentMinHeight", "150px");
    let content_gap = options.text_or("contentGap", "1rem");
    CssLayout::new(
        format!(
            r##"
.hierarchy-layout {{
  display: grid;
  grid-template-rows: auto 1fr;
  grid-template-columns: 1fr;
  gap: {gap};
  height: 100%;
}}

.hierarchy-main {{
  display: grid;
  grid-template-columns: {sidebar_width} 1fr;
  gap: {gap};
}}"##
        ),
        format!(
            r##"
.hierarchy-header {{
  padding: 1rem;
  background-color: #f8f8f8;
}}

.hierarchy-sidebar {{
  background-color: #f0f0f0;
  padding: 1rem;
}}

.hierarchy-content {{
  display: grid;
  grid-template-rows: repeat(auto-fit, minmax({content_min_height}, 1fr));
  gap: {content_gap};
}}

.content-section {{
  background-color: #f8f8f8;
  padding: 1rem;
  border-radius: 0.25rem;
}}

/* Responsive adjustment */
@media (max-width: 768px) {{
  .hierarchy-main {{
    grid-template-columns: 1fr;
  }}
}}"##
        ),
        r##"
<div class="hierarchy-layout">
  <header class="hierarchy-header">
    <h1>Page Title</h1>
  </header>
  <div class="hierarchy-main">
    <nav class="hierarchy-sidebar">
      <ul>
        <li>Navigation Item 1</li>
        <li>Navigation Item 2</li>
        <li>Navigation Item 3</li>
      </ul>
    </nav>
    <main class="hierarchy-content">
      <section class="content-section">
        <h2>Section One</h2>
        <p>Content for section one.</p>
      </section>
      <section class="content-section">
        <h2>Section Two</h2>
        <p>Content for section two.</p>
      </section>
    </main>
  </div>
</div>"##
            .to_string(),
    )
}
