// ABOUTME: TOML scenario format for the simulator and the runner that replays it.
// ABOUTME: Builds a MemoryHost from the box list, then applies each step through the engine.

use anyhow::{bail, Context, Result};
use divbox_core::{Axis, BoxConfig, BoxId, DividerId, EngineSettings, LayoutSnapshot};
use divbox_layout::{DividedBox, MemoryHost, ResizeOptions, TrackEvent};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub axis: Axis,
    pub container: f64,
    /// Falls back to the user settings file when absent
    pub settings: Option<EngineSettings>,
    #[serde(default)]
    pub boxes: Vec<ScenarioBox>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One element of the simulated container
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioBox {
    /// Outer size, chrome included
    pub size: f64,
    #[serde(default)]
    pub chrome: f64,
    /// Content extent used by fit/show; defaults to the content size
    pub content: Option<f64>,
    #[serde(default)]
    pub hidden: bool,
    pub min_size: Option<f64>,
    pub max_size: Option<f64>,
    #[serde(default)]
    pub fixed_size: bool,
}

impl ScenarioBox {
    fn config(&self) -> BoxConfig {
        BoxConfig {
            min_size: self.min_size,
            max_size: self.max_size,
            fixed_size: self.fixed_size,
        }
    }

    fn add_to(&self, host: &mut MemoryHost) -> divbox_layout::ElementId {
        let content = self.content.unwrap_or((self.size - self.chrome).max(0.0));
        let element = host.add_element(self.size, self.chrome, content);
        if self.hidden {
            host.preset_hidden(element);
        }
        element
    }
}

/// Boxes are addressed by their current index, dividers by their index in
/// layout order
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Container { size: f64 },
    /// Drag a divider through a series of cumulative pointer deltas
    Drag { divider: usize, deltas: Vec<f64> },
    Resize { index: usize, size: f64, partition: Option<f64> },
    Minimize { index: usize, partition: Option<f64> },
    Maximize { index: usize },
    Fit { index: usize, partition: Option<f64> },
    Hide { index: usize, partition: Option<f64> },
    Show { index: usize, partition: Option<f64> },
    Fix { index: usize },
    Unfix { index: usize },
    Insert {
        index: usize,
        #[serde(rename = "box")]
        item: ScenarioBox,
    },
    Remove { index: usize },
    ShowDivider {
        divider: usize,
        #[serde(default)]
        forward_adjust: bool,
    },
    HideDivider {
        divider: usize,
        #[serde(default)]
        forward_adjust: bool,
    },
    Refresh,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let scenario: Self = toml::from_str(content).context("Failed to parse scenario")?;
        if let Some(settings) = &scenario.settings {
            settings.validate()?;
        }
        Ok(scenario)
    }

    pub fn settings(&self) -> EngineSettings {
        self.settings
            .clone()
            .unwrap_or_else(EngineSettings::load_or_default)
    }

    /// Replay the scenario and return the final geometry
    pub fn run(&self) -> Result<LayoutSnapshot> {
        let mut host = MemoryHost::new(self.axis, self.container);
        let boxes: Vec<_> = self
            .boxes
            .iter()
            .map(|item| (item.add_to(&mut host), item.config()))
            .collect();
        let mut layout = DividedBox::init(host, self.axis, boxes, self.settings())?;
        tracing::info!(
            "Initialized {} boxes along the {} axis",
            layout.box_count(),
            self.axis.label()
        );

        for (n, step) in self.steps.iter().enumerate() {
            tracing::info!("Step {}: {:?}", n + 1, step);
            apply(&mut layout, step).with_context(|| format!("Step {} failed", n + 1))?;
            for event in layout.drain_events() {
                tracing::debug!("{:?}", event);
            }
            if !layout.check_invariant()? {
                tracing::warn!(
                    "After step {} boxes and dividers take {} of {}",
                    n + 1,
                    layout.total_size()?,
                    layout.host().container()
                );
            }
        }
        Ok(layout.snapshot()?)
    }
}

fn box_at(layout: &DividedBox<MemoryHost>, index: usize) -> Result<BoxId> {
    match layout.box_ids().get(index) {
        Some(&id) => Ok(id),
        None => bail!("No box at index {} ({} boxes)", index, layout.box_count()),
    }
}

fn divider_at(layout: &DividedBox<MemoryHost>, index: usize) -> Result<DividerId> {
    let dividers = layout.divider_ids();
    match dividers.get(index) {
        Some(&id) => Ok(id),
        None => bail!("No divider at index {} ({} dividers)", index, dividers.len()),
    }
}

fn options(partition: Option<f64>) -> ResizeOptions {
    ResizeOptions { partition }
}

fn apply(layout: &mut DividedBox<MemoryHost>, step: &Step) -> Result<()> {
    match step {
        Step::Container { size } => {
            layout.host_mut().set_container_size(*size);
            layout.container_resized()?;
        }
        Step::Drag { divider, deltas } => {
            let id = divider_at(layout, *divider)?;
            let start = layout.divider(id).map(|d| d.position()).unwrap_or_default();
            layout.track(id, TrackEvent::start(start))?;
            let mut last = 0.0;
            for &delta in deltas {
                layout.track(id, TrackEvent::moved(delta, start + delta))?;
                last = delta;
            }
            layout.track(id, TrackEvent::end(last, start + last))?;
        }
        Step::Resize { index, size, partition } => {
            let id = box_at(layout, *index)?;
            layout.resize(id, Some(*size), options(*partition))?;
        }
        Step::Minimize { index, partition } => {
            let id = box_at(layout, *index)?;
            layout.minimize(id, options(*partition))?;
        }
        Step::Maximize { index } => {
            let id = box_at(layout, *index)?;
            layout.maximize(id)?;
        }
        Step::Fit { index, partition } => {
            let id = box_at(layout, *index)?;
            layout.fit_to_contents(id, options(*partition))?;
        }
        Step::Hide { index, partition } => {
            let id = box_at(layout, *index)?;
            layout.hide(id, options(*partition))?;
        }
        Step::Show { index, partition } => {
            let id = box_at(layout, *index)?;
            layout.show(id, options(*partition))?;
        }
        Step::Fix { index } => {
            let id = box_at(layout, *index)?;
            layout.fix_size(id)?;
        }
        Step::Unfix { index } => {
            let id = box_at(layout, *index)?;
            layout.unfix_size(id)?;
        }
        Step::Insert { index, item } => {
            let element = item.add_to(layout.host_mut());
            layout.insert(*index, element, item.config())?;
        }
        Step::Remove { index } => {
            if layout.remove(*index)?.is_none() {
                bail!("No box at index {}", index);
            }
        }
        Step::ShowDivider { divider, forward_adjust } => {
            let id = divider_at(layout, *divider)?;
            layout.show_divider(id, *forward_adjust)?;
        }
        Step::HideDivider { divider, forward_adjust } => {
            let id = divider_at(layout, *divider)?;
            layout.hide_divider(id, *forward_adjust)?;
        }
        Step::Refresh => layout.refresh()?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_BOXES: &str = r#"
axis = "horizontal"
container = 600.0

[settings]
divider_size = 0.0

[[boxes]]
size = 200.0

[[boxes]]
size = 200.0
fixed_size = true

[[boxes]]
size = 200.0
"#;

    #[test]
    fn parses_boxes_and_settings() {
        let scenario = Scenario::from_toml(THREE_BOXES).unwrap();
        assert_eq!(scenario.axis, Axis::Horizontal);
        assert_eq!(scenario.boxes.len(), 3);
        assert!(scenario.boxes[1].fixed_size);
        assert_eq!(scenario.settings().divider_size, 0.0);
        assert!(scenario.steps.is_empty());
    }

    #[test]
    fn container_step_redistributes() {
        let toml = format!("{THREE_BOXES}\n[[steps]]\nop = \"container\"\nsize = 900.0\n");
        let snapshot = Scenario::from_toml(&toml).unwrap().run().unwrap();
        assert_eq!(snapshot.sizes(), vec![350.0, 200.0, 350.0]);
    }

    #[test]
    fn drag_and_insert_steps() {
        let toml = format!(
            "{THREE_BOXES}
[[steps]]
op = \"unfix\"
index = 1

[[steps]]
op = \"drag\"
divider = 0
deltas = [10.0, 40.0]

[[steps]]
op = \"insert\"
index = 3
box = {{ size = 0.0 }}
"
        );
        let snapshot = Scenario::from_toml(&toml).unwrap().run().unwrap();
        assert_eq!(snapshot.boxes.len(), 4);
        assert_eq!(&snapshot.sizes()[..3], &[240.0, 160.0, 200.0]);
        assert!((snapshot.total() - 600.0).abs() < 1e-6);
    }

    #[test]
    fn unknown_index_fails_step() {
        let toml = format!("{THREE_BOXES}\n[[steps]]\nop = \"hide\"\nindex = 7\n");
        let err = Scenario::from_toml(&toml).unwrap().run().unwrap_err();
        assert!(format!("{err:#}").contains("No box at index 7"));
    }

    #[test]
    fn missing_settings_use_user_defaults() {
        let toml = "container = 500.0\n[[boxes]]\nsize = 250.0\n[[boxes]]\nsize = 250.0\n";
        let scenario = Scenario::from_toml(toml).unwrap();
        assert!(scenario.settings.is_none());

        let settings = scenario.settings();
        assert!(settings.validate().is_ok());
        let snapshot = scenario.run().unwrap();
        assert_eq!(snapshot.boxes.len(), 2);
        assert!((snapshot.total() - 500.0).abs() < 1e-6);
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let toml = "container = 100.0\n[settings]\ntolerance = -1.0\n";
        assert!(Scenario::from_toml(toml).is_err());
    }
}
