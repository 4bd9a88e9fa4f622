//! Printing goes straight to the host: the live region is handed over as is, with no
//! capture and no document in between.

use crate::capture::RenderRegion;
use crate::error::ExportError;

/// A host facility that can print a region of type `R`
pub trait PrintHost<R: RenderRegion> {
    /// Send `region` to the printer. Failures are reported as a message.
    fn print(&mut self, region: &R) -> Result<(), String>;
}

/// Print the card currently shown in `region`
pub fn print_ticket<R, H>(host: &mut H, region: &R) -> Result<(), ExportError>
where
    R: RenderRegion,
    H: PrintHost<R> + ?Sized,
{
    let (width, height) = region.size();
    log::debug!("printing {width}x{height} region");
    host.print(region).map_err(ExportError::Print)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Scene;

    #[derive(Default)]
    struct Spool {
        printed: Vec<(f32, f32)>,
        offline: bool,
    }

    impl PrintHost<Scene> for Spool {
        fn print(&mut self, region: &Scene) -> Result<(), String> {
            if self.offline {
                return Err("printer offline".into());
            }
            self.printed.push(region.size());
            Ok(())
        }
    }

    #[test]
    fn hands_the_live_region_to_the_host() {
        let mut spool = Spool::default();
        print_ticket(&mut spool, &Scene::new(600.0, 200.0)).unwrap();
        assert_eq!(spool.printed, vec![(600.0, 200.0)]);
    }

    #[test]
    fn host_failures_are_export_errors() {
        let mut spool = Spool {
            offline: true,
            ..Spool::default()
        };
        let err = print_ticket(&mut spool, &Scene::new(600.0, 200.0)).unwrap_err();
        assert!(matches!(err, ExportError::Print(msg) if msg == "printer offline"));
    }
}
