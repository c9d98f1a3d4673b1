/*!
# `NEXT`

## Purpose
Close the innermost [`FOR`](super::FOR) loop body.

## Remarks
`NEXT` adds one to the loop index and jumps back to the line after the
`FOR` while the index stays inside the range. It does not name the
index; it always serves the innermost open loop. A `NEXT` with no loop
in flight is an error, as is an index variable that no longer holds an
integer.

## Example
```text
for i in 1 to 3
print "🌀" * i
next
```

*/
