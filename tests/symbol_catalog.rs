mod common;

use common::StubApi;
use futures::executor::block_on;
use symbol_chart_wasm::application::{LoadCatalogUseCase, SearchSymbolsUseCase};
use symbol_chart_wasm::domain::market_data::{SEARCH_LIMIT, Symbol, SymbolCatalog, SymbolInfo};

#[test]
fn unreachable_api_falls_back_to_builtin_catalog() {
    let api = StubApi::offline();
    let catalog = block_on(LoadCatalogUseCase::new(&api).execute());

    assert_eq!(catalog.len(), 6);
    assert!(catalog.get(&Symbol::from("^GSPC")).is_some());
    assert_eq!(catalog.categories(), ["stocks", "indices"]);
}

#[test]
fn empty_remote_catalog_also_falls_back() {
    let mut api = StubApi::offline();
    api.symbols = Ok(Vec::new());
    let catalog = block_on(LoadCatalogUseCase::new(&api).execute());
    assert_eq!(catalog, SymbolCatalog::fallback());
}

#[test]
fn remote_catalog_replaces_builtin_one() {
    let mut api = StubApi::offline();
    api.symbols = Ok(vec![
        SymbolInfo::new("NVDA", "NVIDIA Corporation", "NASDAQ", "stocks"),
        SymbolInfo::new("nvda", "duplicate", "NASDAQ", "stocks"),
    ]);
    let catalog = block_on(LoadCatalogUseCase::new(&api).execute());

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(&Symbol::from("NVDA")).unwrap().display_name, "NVIDIA Corporation");
}

#[test]
fn search_falls_back_to_local_catalog() {
    let api = StubApi::offline();
    let catalog = SymbolCatalog::fallback();
    let results = block_on(SearchSymbolsUseCase::new(&api, &catalog).execute("AAPL", SEARCH_LIMIT));

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].identifier, Symbol::from("AAPL"));
    assert_eq!(api.calls(), ["search:AAPL"]);
}

#[test]
fn local_search_matches_display_names_case_insensitively() {
    let catalog = SymbolCatalog::fallback();
    let results = catalog.search("dow", SEARCH_LIMIT);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].identifier.value(), "^DJI");

    assert!(catalog.search("   ", SEARCH_LIMIT).is_empty());
    assert_eq!(catalog.search("a", 2).len(), 2);
}

#[test]
fn remote_results_win_and_are_limited() {
    let mut api = StubApi::offline();
    api.search = Ok((0..12).map(|i| SymbolInfo::new(&format!("AA{i}"), "Remote", "NYSE", "stocks")).collect());
    let catalog = SymbolCatalog::fallback();

    let results = block_on(SearchSymbolsUseCase::new(&api, &catalog).execute("aa", SEARCH_LIMIT));

    assert_eq!(results.len(), SEARCH_LIMIT);
    assert!(results.iter().all(|info| info.display_name == "Remote"));
}

#[test]
fn blank_query_never_reaches_the_api() {
    let api = StubApi::offline();
    let catalog = SymbolCatalog::fallback();
    let results = block_on(SearchSymbolsUseCase::new(&api, &catalog).execute("  ", SEARCH_LIMIT));
    assert!(results.is_empty());
    assert!(api.calls().is_empty());
}
