/*!
# `FOR <name> IN <lower> TO <upper>`

## Purpose
Run the following lines once for each integer in a range.

## Remarks
Both bounds must be integers and `lower` must be strictly below
`upper`. The index variable starts at `lower` and the loop body runs
while the index is below `upper`; the upper bound itself is never
seen. After the loop the index variable keeps its final value.

The loop body extends to the matching [`NEXT`](super::NEXT). Loops may
nest; each `NEXT` belongs to the innermost open `FOR`.

## Example
```text
for i in 1 to 10
print i
next
```
prints `1` through `9`.

*/
