/// Stylesheet shared by every page. Status colours follow the post lifecycle.
pub const GLOBAL_CSS: &str = r#"
:root {
    --color-background: #fafaf9;
    --color-card: #ffffff;
    --color-foreground: #1c1917;
    --color-muted: #f5f5f4;
    --color-muted-foreground: #78716c;
    --color-border: #e7e5e4;
    --color-primary: #ea580c;
    --color-primary-foreground: #ffffff;
    --color-accent: #ffedd5;
    --color-post-planned: #64748b;
    --color-post-happening: #f59e0b;
    --color-post-completed: #16a34a;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    background: var(--color-background);
    color: var(--color-foreground);
}

.card {
    background: var(--color-card);
    border: 1px solid var(--color-border);
    border-radius: 12px;
    padding: 1rem;
}

.muted { color: var(--color-muted-foreground); }

.btn {
    border: none;
    border-radius: 6px;
    padding: 0.4rem 0.8rem;
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
    background: var(--color-primary);
    color: var(--color-primary-foreground);
}

.btn:disabled { opacity: 0.5; cursor: not-allowed; }

.btn-outline {
    background: transparent;
    color: var(--color-foreground);
    border: 1px solid var(--color-border);
}

.btn-ghost {
    background: transparent;
    color: var(--color-muted-foreground);
}

.input {
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--color-border);
    border-radius: 6px;
    font-size: 0.9375rem;
    font-family: inherit;
}

.form-error {
    padding: 0.625rem;
    background: #fef2f2;
    border: 1px solid #fecaca;
    border-radius: 6px;
    color: #dc2626;
    font-size: 0.8125rem;
}

.avatar {
    display: flex;
    align-items: center;
    justify-content: center;
    border-radius: 9999px;
    background: var(--color-muted);
    font-weight: 600;
    overflow: hidden;
}

.badge {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    padding: 0.125rem 0.5rem;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
    color: #ffffff;
}

.status-planned { background: var(--color-post-planned); }
.status-happening { background: var(--color-post-happening); }
.status-completed { background: var(--color-post-completed); }

.ribbon-day {
    display: flex;
    flex-direction: column;
    align-items: center;
    min-width: 44px;
    padding: 0.5rem;
    border: none;
    border-radius: 6px;
    background: transparent;
    cursor: pointer;
}

.ribbon-day.today { background: var(--color-accent); }
.ribbon-day.selected {
    background: var(--color-primary);
    color: var(--color-primary-foreground);
}

.tab-bar {
    position: fixed;
    bottom: 0;
    left: 0;
    right: 0;
    background: var(--color-card);
    border-top: 1px solid var(--color-border);
}

.tab {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.25rem;
    border: none;
    background: transparent;
    color: var(--color-muted-foreground);
    font-size: 0.75rem;
    cursor: pointer;
}

.tab.active { color: var(--color-primary); font-weight: 600; }

.progress {
    height: 8px;
    border-radius: 9999px;
    background: var(--color-muted);
    overflow: hidden;
}

.progress > div {
    height: 100%;
    background: var(--color-primary);
}

.goal-option {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.75rem;
    border: 1px solid var(--color-border);
    border-radius: 8px;
    cursor: pointer;
}

.goal-option.selected {
    border-color: var(--color-primary);
    background: #fff7ed;
}
"#;
