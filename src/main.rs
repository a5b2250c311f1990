use linear_set::LinearHashSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Linear Hashing Set Demo");
    println!("=======================");

    let mut set: LinearHashSet<u64> = LinearHashSet::new();
    for i in 0..40 {
        set.insert(i * 3);
    }
    println!("Inserted {} keys (multiples of 3 below 120)", set.len());

    println!("\nMembership probes:");
    for probe in [0, 3, 4, 57, 119, 120] {
        println!("  contains({}) = {}", probe, set.contains(&probe));
    }

    println!("\nRemoving 9 and 21:");
    set.remove(&9);
    set.remove(&21);
    println!("  len is now {}", set.len());
    println!("  contains(9) = {}", set.contains(&9));

    println!("\nDirectory layout (slots marked '-' are free):");
    set.dump(&mut std::io::stdout())?;

    println!("\nSets compare by content, not insertion order:");
    let forward: LinearHashSet<u32> = (0..10).collect();
    let backward: LinearHashSet<u32> = (0..10).rev().collect();
    println!("  forward == backward: {}", forward == backward);

    println!("\nWide buckets work the same way:");
    let words: LinearHashSet<String, 7> = ["ant", "bee", "cat", "dog", "elk", "fox"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let mut listed: Vec<&String> = words.iter().collect();
    listed.sort();
    println!("  {} words: {:?}", words.len(), listed);

    Ok(())
}
