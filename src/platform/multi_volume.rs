use crate::config::BootstrapConfig;
use crate::error::BootError;
use crate::launch::{EnvLaunchEvents, build_synthetic_context};
use crate::loader::{
    DependencyLayout, DynamicLoader, EntrySymbol, LauncherMainArgv, join_path, load_dependencies,
    resolve_entry, target_file_name,
};
use crate::platform::Platform;
use crate::platform::native::NativeArgv;
use crate::resolve::resolve_volume_base;

use log::debug;

/// Launcher for handhelds with several storage volumes and no usable argv.
pub struct MultiVolumePlatform {
    cfg: BootstrapConfig,
}

impl MultiVolumePlatform {
    pub fn new(cfg: BootstrapConfig) -> Self {
        MultiVolumePlatform { cfg }
    }
}

impl Platform for MultiVolumePlatform {
    fn name(&self) -> &str {
        "multi_volume"
    }

    fn launch(&mut self, argv: &[String]) -> Result<i32, BootError> {
        let mv = &self.cfg.multi_volume;
        let base = resolve_volume_base(mv)?;

        // Not linked against implicitly; loaded ahead of the target
        let roots = [base.path.clone()];
        let layout = DependencyLayout {
            roots: &roots,
            library_dir: &self.cfg.library_dir,
            separator: '/',
            naming: &self.cfg.naming,
        };
        let mut loader = unsafe { DynamicLoader::<LauncherMainArgv>::new() };
        let dependencies = load_dependencies(&mut loader, &mv.dependencies, &layout)?;
        debug!("{} dependencies loaded", dependencies.len());

        let candidates: Vec<String> = mv
            .target_candidates
            .iter()
            .map(|stem| {
                let file = target_file_name(stem, &self.cfg.naming);
                join_path(&base.path, &[&self.cfg.library_dir, &file], '/')
            })
            .collect();
        let symbol = EntrySymbol::Name(self.cfg.entry_symbol.clone());
        let handle = resolve_entry(&mut loader, &candidates, &symbol)?;

        let context = build_synthetic_context(argv, &mut EnvLaunchEvents, mv);
        let mut native = NativeArgv::new(&context.argv);
        Ok(unsafe { (handle.entry)(native.argc(), native.as_mut_ptr()) })
    }
}
