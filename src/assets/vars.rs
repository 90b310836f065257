use std::collections::BTreeMap;

/// Variable table used for placeholder expansion in resource URLs.
///
/// Expansion is pure string substitution of `{Name}` tokens; no IO happens
/// here. The process-wide table is seeded once with the executable's own
/// path and containing directory and lives for the process lifetime; tests
/// build tables by hand instead.
#[derive(Clone, Debug, Default)]
pub struct VarTable {
    vars: BTreeMap<String, String>,
}

impl VarTable {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with `{ExePath}` and `{ExeDir}` from the running
    /// executable.
    pub fn for_process() -> Self {
        let mut table = Self::new();
        if let Ok(exe) = std::env::current_exe() {
            table.add_variable("ExePath", exe.display().to_string());
            if let Some(dir) = exe.parent() {
                table.add_variable("ExeDir", dir.display().to_string());
            }
        }
        table
    }

    /// Define or replace a variable.
    pub fn add_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Value currently bound to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Substitute every `{Name}` token bound in this table.
    ///
    /// Unknown tokens are left in place.
    pub fn expand(&self, template: &str) -> String {
        let mut out = template.to_string();
        for (name, value) in &self.vars {
            let token = format!("{{{name}}}");
            if out.contains(&token) {
                out = out.replace(&token, value);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/vars.rs"]
mod tests;
