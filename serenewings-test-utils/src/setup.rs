/// Build a [`TestContext`](crate::TestContext) with only the given entity tables.
///
/// With no arguments the database is left empty, which is useful for asserting that
/// queries fail when their tables are missing.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestContext::new().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let mut builder = $crate::TestBuilder::new();
            $(builder = builder.with_table($entity);)+
            builder.build().await
        }.await
    }};
}

/// Build a [`TestContext`](crate::TestContext) with every care table created.
#[macro_export]
macro_rules! test_setup_with_care_tables {
    () => {{
        $crate::TestBuilder::new().with_care_tables().build().await
    }};
}
