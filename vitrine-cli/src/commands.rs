//! Command execution against an open catalog store.

use crate::cli::{Commands, ListArgs, VariantCommand, ViewMode};
use crate::render;
use shared::models::{COLOR_PRESETS, DEFAULT_COLOR, DEFAULT_SIZE, SIZE_PRESETS};
use shared::{AppError, AppResult, ProductCreate, VariantInput};
use vitrine_store::{CatalogQuery, CatalogStore, Config, DemoImporter};

pub async fn run(command: Commands, store: &mut CatalogStore, config: &Config) -> AppResult<()> {
    match command {
        Commands::Add { name } => {
            let product = store.add_product(ProductCreate::new(name))?;
            println!("✓ Added {} ({})", product.name, product.id);
        }
        Commands::Rename { id, name } => {
            let mut product = store
                .snapshot()
                .get(&id)
                .cloned()
                .ok_or_else(|| AppError::product_not_found(&id))?;
            product.name = name;
            store.update_product(product)?;
            println!("✓ Renamed {id}");
        }
        Commands::Delete { id } => {
            if !store.delete_product(&id) {
                return Err(AppError::product_not_found(id));
            }
            println!("✓ Deleted {id}");
        }
        Commands::Variant(cmd) => variant(cmd, store)?,
        Commands::List(args) => list(&args, store),
        Commands::Import => {
            let importer = DemoImporter::from_config(config).map_err(AppError::from)?;
            let imported = importer.import_into(store).await?;
            println!("✓ Imported {} demo products", imported.len());
        }
        Commands::Stats => println!("{}", render::stats(&store.snapshot().stats())),
        Commands::Presets => {
            println!("Sizes:  {} (default {DEFAULT_SIZE})", SIZE_PRESETS.join(", "));
            println!("Colors: {} (default {DEFAULT_COLOR})", COLOR_PRESETS.join(", "));
        }
        Commands::Reset { yes } => {
            if !yes {
                return Err(AppError::validation("Pass --yes to delete every product"));
            }
            store.clear();
            println!("✓ Catalog cleared");
        }
    }
    Ok(())
}

fn variant(cmd: VariantCommand, store: &mut CatalogStore) -> AppResult<()> {
    match cmd {
        VariantCommand::Add {
            product_id,
            size,
            color,
            price,
        } => {
            let variant = store
                .add_variant(&product_id, VariantInput::new(size, color, price))?
                .ok_or_else(|| AppError::product_not_found(&product_id))?;
            println!("✓ Added variant {}", variant.id);
        }
        VariantCommand::Update {
            product_id,
            variant_id,
            size,
            color,
            price,
        } => {
            let current = store
                .snapshot()
                .get(&product_id)
                .ok_or_else(|| AppError::product_not_found(&product_id))?
                .variant(&variant_id)
                .cloned()
                .ok_or_else(|| AppError::variant_not_found(&product_id, &variant_id))?;
            let input = VariantInput::new(
                size.unwrap_or(current.size),
                color.unwrap_or(current.color),
                price.unwrap_or(current.price),
            );
            store.update_variant(&product_id, &variant_id, input)?;
            println!("✓ Updated variant {variant_id}");
        }
        VariantCommand::Remove {
            product_id,
            variant_id,
        } => {
            if store.snapshot().get(&product_id).is_none() {
                return Err(AppError::product_not_found(product_id));
            }
            if !store.remove_variant(&product_id, &variant_id) {
                return Err(AppError::variant_not_found(product_id, variant_id));
            }
            println!("✓ Removed variant {variant_id}");
        }
    }
    Ok(())
}

fn list(args: &ListArgs, store: &CatalogStore) {
    let catalog = store.snapshot();
    let query = CatalogQuery::new(args.search.clone())
        .sorted(args.sort.into())
        .filtered(args.filter());
    let products = query.apply(&catalog);

    let body = match args.view {
        ViewMode::Grid => render::grid(&products),
        ViewMode::List => render::list(&products),
    };
    println!("{body}");
    println!("{}", render::footer(products.len(), catalog.len()));
}
