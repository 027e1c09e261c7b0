// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::scheduler::config::SchedulerConfig;

/// The settings in effect, with defaults filled in.
#[derive(Serialize)]
struct EffectiveSettings<'a> {
    leech_threshold: u32,
    scheduler: &'a SchedulerConfig,
}

pub fn print_settings(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    print!("{}", render_settings(&coll)?);
    Ok(())
}

fn render_settings(coll: &Collection) -> Fallible<String> {
    let settings = EffectiveSettings {
        leech_threshold: coll.settings.leech_threshold(),
        scheduler: coll.scheduler.config(),
    };
    Ok(toml::to_string(&settings)?)
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;
    use crate::config::SETTINGS_FILE_NAME;
    use crate::config::Settings;

    #[test]
    fn test_render_round_trips() -> Fallible<()> {
        let dir = tempdir()?;
        write(
            dir.path().join(SETTINGS_FILE_NAME),
            "leech_threshold = 4\n[scheduler]\nease_max = 3.5\n",
        )?;
        let coll = Collection::new(Some(dir.path().display().to_string()))?;
        let rendered = render_settings(&coll)?;
        let reparsed = Settings::parse(&rendered)?;
        assert_eq!(reparsed.leech_threshold(), 4);
        assert_eq!(reparsed.scheduler_config(), *coll.scheduler.config());
        Ok(())
    }
}
