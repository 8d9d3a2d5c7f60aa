/// Runs each listed test function once per resolver setup.
///
/// Every function takes `&mut MappingsTest` and gets fresh, empty stores.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+
    ) => {
        mod catalog {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::MappingsTest::new(
                        $crate::setup::SetupCatalog::new()
                    );

                    super::$f(&mut test);
                }
            )*
        }

        mod scan {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::MappingsTest::new(
                        $crate::setup::SetupScan::new()
                    );

                    super::$f(&mut test);
                }
            )*
        }
    };
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident,
        )+
    ) => {
        $crate::tests!( $(
            $( #[$attrs] )*
            $f
        ),+ );
    }
}
