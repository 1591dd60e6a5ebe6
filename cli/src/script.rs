//! Flow scripts
//!
//! A flow script is a TOML description of a flow:
//!
//! ```toml
//! name = "checkout"
//!
//! [[step]]
//! node = "receive"
//!
//! [[step]]
//! wait = 10
//!
//! [[step]]
//! node = "charge"
//!
//! [[step]]
//! branch = { wait = 15, steps = [{ node = "ship" }] }
//!
//! [[step]]
//! branch = { label = "declined", steps = [{ node = "refund" }] }
//! ```
//!
//! `wait` and `label` stage an edge label on the running cursor. `branch`
//! checks out a cursor from the current node, runs its nested steps on it,
//! and the script carries on from where it stood before the branch.

use anyhow::{Context, Result, bail};
use dendrite_core::{Flow, Transition};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowScript {
    pub name: String,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Append a node with this payload
    Node(String),
    /// Stage a wait for the next node
    Wait(u64),
    /// Stage a free-form label for the next node
    Label(String),
    /// Fan out from the current node
    Branch(BranchStep),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BranchStep {
    pub wait: Option<u64>,
    pub label: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl BranchStep {
    fn transition(&self) -> Result<Transition> {
        match (self.wait, &self.label) {
            (Some(duration), None) => Ok(Transition::wait(duration)),
            (None, Some(name)) => Ok(Transition::label(name.clone())),
            (Some(_), Some(_)) => bail!("branch takes either `wait` or `label`, not both"),
            (None, None) => bail!("branch needs a `wait` or `label` edge"),
        }
    }
}

impl FlowScript {
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse flow script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read flow script: {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("Invalid flow script: {}", path.display()))
    }

    /// Run the script against a fresh flow.
    pub fn build(&self) -> Result<Flow> {
        let mut flow = Flow::new(self.name.clone());
        run_steps(&mut flow, &self.steps)?;
        tracing::info!(
            flow = %self.name,
            nodes = flow.store().borrow().node_count(),
            edges = flow.store().borrow().edge_count(),
            "flow built"
        );
        Ok(flow)
    }
}

fn run_steps(cursor: &mut Flow, steps: &[Step]) -> Result<()> {
    for (index, step) in steps.iter().enumerate() {
        match step {
            Step::Node(payload) => {
                cursor.append_node(payload.clone());
            }
            Step::Wait(duration) => {
                cursor.stage_wait(*duration);
            }
            Step::Label(name) => {
                cursor.stage_edge(Transition::label(name.clone()));
            }
            Step::Branch(branch) => {
                let transition = branch
                    .transition()
                    .with_context(|| format!("step {}", index + 1))?;
                let mut scope = cursor.set_pending_edge(transition);
                run_steps(&mut scope, &branch.steps)
                    .with_context(|| format!("in branch at step {}", index + 1))?;
            }
        }
    }
    Ok(())
}
