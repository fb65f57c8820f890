//! Global CSS styles for the intake form.
//!
//! Light card layout; one accent color per navigation action.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --page-bg: #f9fafb;
  --card-bg: #ffffff;
  --border: #d1d5db;
  --text-primary: #1f2937;
  --text-secondary: #374151;
  --text-muted: #4b5563;

  --focus: #3b82f6;
  --danger: #ef4444;
  --back: #16a34a;
  --back-hover: #15803d;
  --continue: #2563eb;
  --continue-hover: #1d4ed8;
  --submit: #4f46e5;
  --submit-hover: #4338ca;
  --success: #15803d;

  --radius: 0.5rem;
  --transition: 200ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.5;
}

.intake-page {
  display: flex;
  flex-direction: column;
  align-items: center;
  min-height: 100vh;
  padding: 1.5rem;
}

/* === Form Card === */
.intake-form,
.summary-card {
  width: 100%;
  max-width: 32rem;
  background: var(--card-bg);
  padding: 2rem;
  border-radius: var(--radius);
  box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1);
}

.form-title {
  font-size: 1.875rem;
  font-weight: 800;
  margin-bottom: 1.25rem;
}

.step-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: 1rem;
  color: var(--text-secondary);
}

.step-fields {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

/* === Step Indicator === */
.step-indicator {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.step-dot {
  width: 0.625rem;
  height: 0.625rem;
  border-radius: 50%;
  background: var(--border);
}

.step-dot.done { background: var(--back); }
.step-dot.current { background: var(--continue); }

.step-count {
  margin-left: auto;
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.input-label {
  font-weight: 500;
  color: var(--text-secondary);
}

.input-hint {
  color: var(--text-muted);
}

.input-field {
  width: 100%;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.5rem 1rem;
  font: inherit;
  transition: box-shadow var(--transition);
}

.input-field:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--focus);
}

.input-field.invalid,
.multi-select.invalid {
  border-color: var(--danger);
}

.textarea {
  min-height: 6rem;
  resize: vertical;
}

.radio-group {
  display: flex;
  gap: 1.5rem;
}

.radio-option,
.multi-option {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
}

.multi-select {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 0.5rem 1rem;
}

.multi-option.selected {
  font-weight: 600;
}

.field-error {
  color: var(--danger);
  font-size: 0.875rem;
}

/* === Navigation === */
.form-navigation {
  display: flex;
  justify-content: space-between;
  margin-top: 1.5rem;
}

.btn {
  cursor: pointer;
  color: #ffffff;
  border: none;
  padding: 0.5rem 1rem;
  border-radius: 0.375rem;
  font: inherit;
  transition: background var(--transition);
}

.btn-back { background: var(--back); }
.btn-back:hover { background: var(--back-hover); }
.btn-continue { background: var(--continue); margin-left: auto; }
.btn-continue:hover { background: var(--continue-hover); }
.btn-submit { background: var(--submit); margin-left: auto; }
.btn-submit:hover { background: var(--submit-hover); }

/* === Summary === */
.summary-card {
  text-align: center;
}

.summary-title {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
  color: var(--success);
}

.summary-text,
.summary-meta {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.summary-body {
  background: #f3f4f6;
  padding: 1.5rem;
  border-radius: 0.375rem;
  text-align: left;
  font-size: 0.875rem;
  max-height: 24rem;
  overflow: auto;
}

.summary-heading {
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.summary-row {
  display: flex;
  gap: 0.75rem;
  padding: 0.25rem 0;
}

.summary-row dt {
  font-weight: 600;
  min-width: 11rem;
}

.summary-json {
  margin-top: 1rem;
  white-space: pre-wrap;
}
"#;
