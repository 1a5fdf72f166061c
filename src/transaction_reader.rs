// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rule_miner::TransactionMatrix;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;

/// One transaction per line, comma-separated item names. Blank fields and
/// blank lines are skipped; duplicate items within a line count once.
pub fn read_transaction_matrix(path: &str) -> io::Result<TransactionMatrix> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut matrix = TransactionMatrix::new();
    for line in reader.lines() {
        let line = line?;
        let names = parse_basket(&line);
        if !names.is_empty() {
            matrix.add_transaction(&names);
        }
    }
    Ok(matrix)
}

fn parse_basket(line: &str) -> Vec<&str> {
    line.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}
