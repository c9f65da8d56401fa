/// Stylesheet shared by the onboarding screens.
pub const STYLES: &str = r#"
.screen {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
    padding: 2rem 1.5rem;
    background: #ffffff;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
}
.screen--center { align-items: center; justify-content: center; }
.screen-title { margin: 0 0 0.5rem; color: #1d76db; font-weight: 700; font-size: 1.75rem; }
.screen-subtitle { margin: 0 0 2rem; color: #787774; font-size: 0.9375rem; }
.screen-footer { margin-top: 1.5rem; font-size: 0.875rem; color: #787774; }
.form { display: flex; flex-direction: column; gap: 0.75rem; width: 100%; }
.form-alert {
    padding: 0.625rem;
    background: #fef2f2;
    border: 1px solid #fecaca;
    border-radius: 4px;
    color: #dc2626;
    font-size: 0.8125rem;
}
.field { display: flex; flex-direction: column; gap: 0.375rem; }
.field-label { font-size: 0.875rem; font-weight: 500; color: #37352f; }
.field-row { display: flex; gap: 0.5rem; align-items: center; }
.field-input {
    flex: 1;
    padding: 0.875rem 0.75rem;
    border: 1px solid #ff9933;
    border-radius: 1rem;
    font-size: 0.9375rem;
}
.field-input--invalid { border-color: #ef4444; }
.field-error { margin: 0; color: #ef4444; font-size: 0.75rem; }
.btn { padding: 0.75rem 1.25rem; border: none; border-radius: 1rem; font-size: 0.9375rem; font-weight: 500; }
.btn:disabled { opacity: 0.5; }
.btn-primary { background: #1d76db; color: #ffffff; }
.btn-secondary { background: #f6f9fc; color: #1d76db; border: 1px solid #1d76db; }
.btn-row { display: flex; gap: 0.75rem; margin-top: 1rem; }
.btn-row > .btn { flex: 1; }
.icon-btn { background: none; border: none; padding: 0.5rem; color: #787774; }
.link { background: none; border: none; padding: 0; color: #1d76db; font-size: inherit; }
.steps { display: flex; align-items: center; margin-bottom: 1.5rem; }
.step-dot {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    border: 1px solid #d1d5db;
    background: #ffffff;
    color: #9ca3af;
}
.step-dot--active { background: #1d76db; border-color: #1d76db; color: #ffffff; }
.step-bar { flex: 1; height: 2px; background: #e5e7eb; }
.step-bar--done { background: #1d76db; }
.spinner {
    width: 2.5rem;
    height: 2.5rem;
    margin-top: 2rem;
    border: 3px solid #f6f9fc;
    border-top-color: #228b22;
    border-radius: 50%;
    animation: spin 1s linear infinite;
}
@keyframes spin { to { transform: rotate(360deg); } }
"#;
