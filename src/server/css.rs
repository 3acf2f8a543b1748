pub(super) const PAGE_CSS: &str = r#"* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { min-height: 100%; background: #FAF8F5; color: #2A2A2A;
  font-family: system-ui, -apple-system, sans-serif; font-size: 14px; }
a { color: inherit; text-decoration: none; }

/* ── Header ──────────────────────────────────────── */
.header {
  height: 52px; display: flex; align-items: center; padding: 0 24px;
  border-bottom: 1px solid #E8E2D9; gap: 12px; background: #FFF;
}
.header .title { font-weight: 600; font-size: 15px; }
.header .count { color: #8A857D; font-size: 12px; }

/* ── Gallery ─────────────────────────────────────── */
.gallery { padding: 24px; }
.gallery h2 { font-size: 22px; font-weight: 500; margin-bottom: 24px; }
.group { margin-bottom: 32px; }
.group h3 {
  font-size: 11px; text-transform: uppercase; letter-spacing: 1px;
  color: #8A857D; font-weight: 500; margin: 0 0 12px 4px;
}
.cards {
  display: grid; gap: 16px;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
}
.card {
  display: block; border: 1px solid #E8E2D9; border-radius: 12px;
  background: #FFF; overflow: hidden; transition: transform 0.2s, box-shadow 0.2s;
}
.card:hover { transform: translateY(-4px); box-shadow: 0 4px 12px rgba(0,0,0,0.06); }
.card .thumb {
  aspect-ratio: 4 / 3; border-bottom: 1px solid #E8E2D9; background: #F3EFE9;
  display: flex; align-items: center; justify-content: center;
  color: #B5AEA3; font-family: ui-monospace, monospace; font-size: 12px;
}
.card .meta { padding: 12px 16px; }
.card .name { font-weight: 500; }
.card .desc { font-size: 12px; color: #6B665F; margin-top: 4px; }

/* ── Selected view ───────────────────────────────── */
.selected {
  padding: 24px; display: grid; gap: 24px;
  grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
}
.selected-head { display: flex; align-items: center; justify-content: space-between; }
.selected-head h2 { font-size: 22px; font-weight: 500; }
.selected-head p { color: #6B665F; margin-top: 4px; }
.back {
  padding: 8px 16px; border-radius: 999px; background: #EDE7DE; font-size: 13px;
}
.back:hover { background: #E2DACE; }
.panel {
  border: 1px solid #E8E2D9; border-radius: 12px; background: #FFF;
  overflow: hidden; display: flex; flex-direction: column;
}
.panel-label {
  padding: 8px 12px; border-bottom: 1px solid #E8E2D9; background: #FAF8F5;
  font-size: 13px; font-weight: 500;
}

/* ── Options ─────────────────────────────────────── */
.options { padding: 12px; display: grid; gap: 8px; }
.options label { display: grid; grid-template-columns: 140px 1fr; align-items: center; gap: 8px; }
.options .key { font-family: ui-monospace, monospace; font-size: 12px; color: #6B665F; }
.options input[type="text"], .options select {
  border: 1px solid #E8E2D9; border-radius: 6px; padding: 6px 8px; font: inherit;
}
.options button {
  justify-self: start; padding: 6px 14px; border-radius: 6px; border: none;
  background: #1F1F1F; color: #FFF; cursor: pointer;
}
.options .none { color: #8A857D; font-size: 12px; }

/* ── Code tabs ───────────────────────────────────── */
.tabs { display: flex; border-bottom: 1px solid #E8E2D9; }
.tabs button {
  padding: 8px 16px; font: inherit; font-size: 13px; font-weight: 500;
  background: none; border: none; border-bottom: 2px solid transparent; cursor: pointer;
}
.tabs button.active { background: #F3EFE9; border-bottom-color: #1F1F1F; }
.tabs .copy { margin-left: auto; color: #6B665F; }
.code {
  display: none; margin: 0; padding: 16px; background: #141414; color: #EDE7DE;
  font-family: ui-monospace, monospace; font-size: 13px; white-space: pre-wrap;
  overflow: auto; max-height: 480px;
}
.code.active { display: block; }

/* ── Preview ─────────────────────────────────────── */
.frame { height: 500px; }
.frame iframe { width: 100%; height: 100%; border: none; }

/* ── Errors ──────────────────────────────────────── */
.error { padding: 48px 24px; text-align: center; }
.error .status { font-size: 48px; font-weight: 600; color: #B5AEA3; }
.error p { margin: 12px 0 24px; color: #6B665F; }
"#;
