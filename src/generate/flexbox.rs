//! Flexbox templates.

use super::CssLayout;
use crate::options::LayoutOptions;

pub(super) fn generate(template_id: &str, options: &LayoutOptions) -> CssLayout {
    match template_id {
        "row" => row(options),
        "row-wrap" => row_wrap(options),
        "fill-space" => fill_space(options),
        "fill-remaining-space" => fill_remaining_space(options),
        "separate" => separate(options),
        "centered-content" => centered_content(options),
        "fixed-header" => fixed_header(),
        "tabs-layout" => tabs_layout(),
        "z-stack" => z_stack(options),
        _ => CssLayout::empty(),
    }
}

fn row(options: &LayoutOptions) -> CssLayout {
    let gap = options.text_or("gap", "1rem");
    let wrap = if options.flag("wrap") { "flex-wrap: wrap;" } else { "" };
    let grow_items = if options.flag("growItems") { "flex: 1;" } else { "" };
    CssLayout::new(
        format!(
            r##"
.flex-row {{
  display: flex;
  gap: {gap};
  flex-direction: row;
  {wrap}
}}"##
        ),
        format!(
            r##"
.flex-item {{
  {grow_items}
}}"##
        ),
        r##"
<div class="flex-row">
  <div class="flex-item">Item 1</div>
  <div class="flex-item">Item 2</div>
  <div class="flex-item">Item 3</div>
</div>"##
            .to_string(),
    )
}

fn row_wrap(options: &LayoutOptions) -> CssLayout {
    let gap = options.text_or("gap", "1rem");
    let item_width = options.text_or("itemWidth", "calc(33.333% - 0.67rem)");
    let min_width = options.text_or("minWidth", "200px");
    let mobile_item_width = options.text_or("mobileItemWidth", "calc(50% - 0.5rem)");
    CssLayout::new(
        format!(
            r##"
.flex-wrap {{
  display: flex;
  flex-wrap: wrap;
  gap: {gap};
}}"##
        ),
        format!(
            r##"
.flex-item {{
  flex: 0 0 {item_width};
  min-width: {min_width};
}}

/* Responsive adjustment */
@media (max-width: 768px) {{
  .flex-item {{
    flex: 0 0 {mobile_item_width};
  }}
}}

@media (max-width: 480px) {{
  .flex-item {{
    flex: 0 0 100%;
  }}
}}"##
        ),
        r##"
<div class="flex-wrap">
  <div class="flex-item">Item 1</div>
  <div class="flex-item">Item 2</div>
  <div class="flex-item">Item 3</div>
  <div class="flex-item">Item 4</div>
  <div class="flex-item">Item 5</div>
  <div class="flex-item">Item 6</div>
</div>"##
            .to_string(),
    )
}

fn fill_space(options: &LayoutOptions) -> CssLayout {
    let gap = options.text_or("gap", "1rem");
    CssLayout::new(
        format!(
            r##"
.fill-space {{
  display: flex;
  gap: {gap};
  width: 100%;
}}"##
        ),
        r##"
.fill-item {
  flex: 1;
}"##
            .to_string(),
        r##"
<div class="fill-space">
  <div class="fill-item">Equal Width</div>
  <div class="fill-item">Equal Width</div>
  <div class="fill-item">Equal Width</div>
</div>"##
            .to_string(),
    )
}

fn fill_remaining_space(options: &LayoutOptions) -> CssLayout {
    let gap = options.text_or("gap", "1rem");
    let fixed_width = options.text_or("fixedWidth", "200px");
    CssLayout::new(
        format!(
            r##"
.flex-container {{
  display: flex;
  gap: {gap};
  width: 100%;
}}"##
        ),
        format!(
            r##"
.fixed-item {{
  width: {fixed_width};
}}

.flex-item {{
  flex: 1;
}}"##
        ),
        r##"
<div class="flex-container">
  <div class="fixed-item">Fixed Width</div>
  <div class="fixed-item">Fixed Width</div>
  <div class="flex-item">Fills Remaining Space</div>
</div>"##
            .to_string(),
    )
}

fn separate(options: &LayoutOptions) -> CssLayout {
    let item_gap = options.text_or("itemGap", "1rem");
    CssLayout::new(
        r##"
.flex-separate {
  display: flex;
  justify-content: space-between;
  align-items: center;
  width: 100%;
}"##
            .to_string(),
        format!(
            r##"
.left-items {{
  display: flex;
  gap: {item_gap};
}}

.right-item {{
  /* Optional styling */
}}"##
        ),
        r##"
<div class="flex-separate">
  <div class="left-items">
    <div>Left Item 1</div>
    <div>Left Item 2</div>
  </div>
  <div class="right-item">Right Item</div>
</div>"##
            .to_string(),
    )
}

fn centered_content(options: &LayoutOptions) -> CssLayout {
    let min_height = options.text_or("minHeight", "100vh");
    let max_width = options.text_or("maxWidth", "500px");
    let padding = options.text_or("padding", "2rem");
    let shadow = if options.flag("shadow") { "0 4px 6px rgba(0, 0, 0, 0.1)" } else { "none" };
    CssLayout::new(
        format!(
            r##"
.centered-container {{
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: {min_height};
  width: 100%;
}}"##
        ),
        format!(
            r##"
.centered-content {{
  max-width: {max_width};
  width: 100%;
  padding: {padding};
  background-color: white;
  border-radius: 0.5rem;
  box-shadow: {shadow};
}}"##
        ),
        r##"
<div class="centered-container">
  <div class="centered-content">
    <h2>Centered Content</h2>
    <p>This content is centered both horizontally and vertically.</p>
  </div>
</div>"##
            .to_string(),
    )
}

fn fixed_header() -> CssLayout {
    CssLayout::new(
        r##"
.fixed-header-layout {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}"##
            .to_string(),
        r##"
.fixed-header {
  position: sticky;
  top: 0;
  background-color: white;
  padding: 1rem;
  z-index: 10;
  box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
}

.fixed-header-content {
  flex: 1;
  padding: 1rem;
}"##
            .to_string(),
        r##"
<div class="fixed-header-layout">
  <header class="fixed-header">
    <h1>Site Title</h1>
    <nav>
      <a href="#">Home</a>
      <a href="#">About</a>
      <a href="#">Contact</a>
    </nav>
  </header>
  <main class="fixed-header-content">
    <h2>Main Content</h2>
    <p>Content goes here. Scroll down to see the fixed header in action.</p>
    <!-- Add more content to enable scrolling -->
    <div style="height: 1000px;"></div>
  </main>
</div>"##
            .to_string(),
    )
}

fn tabs_layout() -> CssLayout {
    CssLayout::new(
        r##"
.tabs-container {
  display: flex;
  flex-direction: column;
  width: 100%;
}"##
            .to_string(),
        r##"
.tabs {
  display: flex;
  border-bottom: 1px solid #ddd;
}

.tab {
  padding: 0.75rem 1.5rem;
  cursor: pointer;
  border-bottom: 2px solid transparent;
}

.tab.active {
  border-bottom-color: #333;
  font-weight: bold;
}

.tab-content {
  padding: 1.5rem;
  display: none;
}

.tab-content.active {
  display: block;
}"##
            .to_string(),
        r##"
<div class="tabs-container">
  <div class="tabs">
    <div class="tab active">Tab 1</div>
    <div class="tab">Tab 2</div>
    <div class="tab">Tab 3</div>
  </div>
  <div class="tab-content active">
    <h2>Tab 1 Content</h2>
    <p>This is the content for the first tab.</p>
  </div>
  <div class="tab-content">
    <h2>Tab 2 Content</h2>
    <p>This is the content for the second tab.</p>
  </div>
  <div class="tab-content">
    <h2>Tab 3 Content</h2>
    <p>This is the content for the third tab.</p>
  </div>
</div>
<script>
  // Basic JavaScript to handle tab switching
  document.querySelectorAll('.tab').forEach((tab, index) => {
    tab.addEventListener('click', () => {
      // Remove active class from all tabs and contents
      document.querySelectorAll('.tab').forEach(t => t.classList.remove('active'));
      document.querySelectorAll('.tab-content').forEach(c => c.classList.remove('active'));
      
      // Add active class to clicked tab and corresponding content
      tab.classList.add('active');
      document.querySelectorAll('.tab-content')[index].classList.add('active');
    });
  });
</script>"##
            .to_string(),
    )
}

fn z_stack(options: &LayoutOptions) -> CssLayout {
    let width = options.text_or("width", "100%");
    let height = options.text_or("height", "auto");
    CssLayout::new(
        format!(
            r##"
.z-stack {{
  position: relative;
  width: {width};
  height: {height};
}}"##
        ),
        r##"
.z-stack-item {
  position: absolute;
  /* Items can be positioned individually */
}

.z-stack-item:nth-child(1) {
  z-index: 1;
  top: 0;
  left: 0;
}

.z-stack-item:nth-child(2) {
  z-index: 2;
  top: 20px;
  left: 20px;
}

.z-stack-item:nth-child(3) {
  z-index: 3;
  top: 40px;
  left: 40px;
}"##
            .to_string(),
        r##"
<div class="z-stack" style="height: 300px;">
  <div class="z-stack-item" style="width: 200px; height: 200px; background-color: #ffe0e0;">
    Bottom Layer
  </div>
  <div class="z-stack-item" style="width: 200px; height: 200px; background-color: #e0ffe0;">
    Middle Layer
  </div>
  <div class="z-stack-item" style="width: 200px; height: 200px; background-color: #e0e0ff;">
    Top Layer
  </div>
</div>"##
            .to_string(),
    )
}
